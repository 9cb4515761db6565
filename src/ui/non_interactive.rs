//! Plain line-oriented UI for CI, pipes and log files.

use super::progress::format_bytes;
use super::{OutputMode, SpinnerHandle, TransferHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners and progress bars would fill logs with control sequences, so
/// they are replaced by one line at start and one at the end.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn start_transfer(&mut self, message: &str, total: Option<u64>) -> Box<dyn TransferHandle> {
        if self.mode.shows_progress() {
            match total {
                Some(total) => println!("  {} ({})", message, format_bytes(total)),
                None => println!("  {}", message),
            }
        }
        Box::new(LineTransfer {
            mode: self.mode,
            position: 0,
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints the final state only.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  ✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  ✗ {}", msg);
    }
}

/// Transfer stand-in that reports the byte count when done.
struct LineTransfer {
    mode: OutputMode,
    position: u64,
}

impl TransferHandle for LineTransfer {
    fn set_position(&mut self, bytes: u64) {
        self.position = bytes;
    }

    fn finish(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  ✓ {}", msg);
        }
    }

    fn abandon(&mut self, msg: &str) {
        eprintln!("  ✗ {} after {}", msg, format_bytes(self.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn handles_full_lifecycle() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.show_header("Working on ADPAA");
        let mut transfer = ui.start_transfer("Downloading ADPAA.tar.gz", Some(2048));
        transfer.set_position(2048);
        transfer.finish("Downloaded ADPAA.tar.gz");
        let mut spinner = ui.start_spinner("Extracting");
        spinner.finish_success("Extracted");
        ui.success("Finished ADPAA");
    }
}
