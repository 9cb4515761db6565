//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments and redirected output
//! - [`MockUI`] for tests
//! - Spinners and byte progress bars
//!
//! # Example
//!
//! ```
//! use copas::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Working on ADPAA");
//! ui.success("Finished ADPAA");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockTransfer, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::{format_bytes, format_duration};
pub use spinner::{ProgressSpinner, TransferBar};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CopasTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Start a spinner for an operation of unknown length.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Start a byte-count progress display; `total` is the expected size.
    fn start_transfer(&mut self, message: &str, total: Option<u64>) -> Box<dyn TransferHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Handle for a byte transfer in progress.
pub trait TransferHandle {
    /// Bytes transferred so far.
    fn set_position(&mut self, bytes: u64);

    /// Mark the transfer as complete.
    fn finish(&mut self, msg: &str);

    /// Abandon the transfer display.
    fn abandon(&mut self, msg: &str);
}
