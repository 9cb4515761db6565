//! Spinners and transfer progress bars.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::CopasTheme;
use super::{SpinnerHandle, TransferHandle};

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: CopasTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: CopasTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("  {spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: CopasTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("  {msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

/// Byte progress bar for downloads.
///
/// With an unknown total it degrades to a spinner showing the running count.
pub struct TransferBar {
    bar: ProgressBar,
    theme: CopasTheme,
}

impl TransferBar {
    /// Create a transfer bar.
    pub fn new(message: &str, total: Option<u64>, theme: CopasTheme) -> Self {
        let (bar, template) = match total {
            Some(len) => (
                ProgressBar::new(len),
                "  {msg}\n  [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}",
            ),
            None => (ProgressBar::new_spinner(), "  {spinner:.cyan} {msg} {bytes}"),
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template(template)
            .map(|s| s.progress_chars("=> "))
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        if total.is_none() {
            bar.enable_steady_tick(Duration::from_millis(120));
        }

        Self { bar, theme }
    }

    /// Create a bar that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: CopasTheme::plain(),
        }
    }

    /// Current position in bytes.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl TransferHandle for TransferBar {
    fn set_position(&mut self, bytes: u64) {
        self.bar.set_position(bytes);
    }

    fn finish(&mut self, msg: &str) {
        if let Ok(style) = ProgressStyle::default_bar().template("  {msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(self.theme.format_success(msg));
    }

    fn abandon(&mut self, msg: &str) {
        self.bar.abandon_with_message(self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_accepts_all_calls() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_success("Cloned soda2");
    }

    #[test]
    fn hidden_transfer_tracks_position() {
        let mut bar = TransferBar::hidden();
        bar.set_position(4096);
        assert_eq!(bar.position(), 4096);
        bar.finish("Downloaded");
    }

    #[test]
    fn transfer_without_total_tracks_position() {
        let mut bar = TransferBar::new("Downloading", None, CopasTheme::plain());
        bar.set_position(10);
        assert_eq!(bar.position(), 10);
        bar.abandon("Interrupted");
    }
}
