//! CoPAS CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use copas::cli::{Cli, CommandDispatcher};
use copas::config::load_config;
use copas::shell::is_ci;
use copas::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("copas=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("copas=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Process exit status for a command's exit code; out-of-range codes become 1.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("CoPAS starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            create_ui(false, OutputMode::Normal)
                .error(&format!("Error: cannot determine the working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let config = match load_config(cli.config.as_deref(), &working_dir) {
        Ok(config) => config,
        Err(e) => {
            create_ui(false, OutputMode::Normal).error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(!is_ci(), cli.output_mode(&config));
    let dispatcher = CommandDispatcher::new(working_dir, config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(exit_status(result.exit_code)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_keeps_codes_in_range() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(2), 2);
        assert_eq!(exit_status(255), 255);
    }

    #[test]
    fn exit_status_never_wraps_to_success() {
        assert_eq!(exit_status(256), 1);
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(i32::MAX), 1);
    }
}
