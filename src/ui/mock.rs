//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use copas::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Working on SODA");
//! ui.success("Finished SODA");
//!
//! assert!(ui.has_header("SODA"));
//! assert!(ui.has_success("Finished SODA"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, TransferHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    transfers: Vec<(String, Option<u64>)>,
    transfer_positions: Rc<RefCell<Vec<u64>>>,
    transfer_outcomes: Rc<RefCell<Vec<String>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all transfers that were started, with their announced totals.
    pub fn transfers(&self) -> &[(String, Option<u64>)] {
        &self.transfers
    }

    /// Every position reported to any transfer handle, in order.
    pub fn transfer_positions(&self) -> Vec<u64> {
        self.transfer_positions.borrow().clone()
    }

    /// Messages passed to `finish` or `abandon` on any transfer handle.
    pub fn transfer_outcomes(&self) -> Vec<String> {
        self.transfer_outcomes.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific header was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn start_transfer(&mut self, message: &str, total: Option<u64>) -> Box<dyn TransferHandle> {
        self.transfers.push((message.to_string(), total));
        Box::new(MockTransfer {
            positions: Rc::clone(&self.transfer_positions),
            outcomes: Rc::clone(&self.transfer_outcomes),
        })
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that ignores every call.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl MockSpinner {
    pub fn new() -> Self {
        Self
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

/// Transfer handle that records positions and outcomes into its [`MockUI`].
#[derive(Debug)]
pub struct MockTransfer {
    positions: Rc<RefCell<Vec<u64>>>,
    outcomes: Rc<RefCell<Vec<String>>>,
}

impl TransferHandle for MockTransfer {
    fn set_position(&mut self, bytes: u64) {
        self.positions.borrow_mut().push(bytes);
    }

    fn finish(&mut self, msg: &str) {
        self.outcomes.borrow_mut().push(msg.to_string());
    }

    fn abandon(&mut self, msg: &str) {
        self.outcomes.borrow_mut().push(msg.to_string());
    }
}
