//! External program execution.
//!
//! Programs are spawned directly (no intermediate shell), so arguments such
//! as URLs and paths never need quoting.

use crate::error::{CopasError, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, empty unless captured.
    pub stdout: String,

    /// Standard error, empty unless captured.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with code 0.
    pub success: bool,
}

/// Options for running a program.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout and stderr (if false, both are inherited).
    pub capture: bool,
}

impl CommandOptions {
    /// Capture output, run in the current directory.
    pub fn captured() -> Self {
        Self {
            cwd: None,
            capture: true,
        }
    }

    /// Run in `cwd`.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Render a program and its arguments for messages and errors.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

/// Run `program` with `args`.
///
/// Fails only if the program cannot be started; a non-zero exit is reported
/// through [`CommandOutput::success`].
pub fn run<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandOutput> {
    let start = Instant::now();
    let rendered = display_command(program, args);
    tracing::debug!("Running: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start {}: {}", program, e);
        CopasError::CommandFailed {
            command: rendered.clone(),
            code: None,
            reason: e.to_string(),
        }
    })?;

    let duration = start.elapsed();
    let (stdout, stderr) = if options.capture {
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Run `program` and turn a non-zero exit into [`CopasError::CommandFailed`].
pub fn run_checked<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandOutput> {
    let output = run(program, args, options)?;

    if !output.success {
        if !output.stderr.is_empty() {
            tracing::error!("{}", output.stderr.trim_end());
        }
        let reason = match output.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        return Err(CopasError::CommandFailed {
            command: display_command(program, args),
            code: output.exit_code,
            reason,
        });
    }

    Ok(output)
}

/// Whether `program` runs and exits 0, with output discarded.
pub fn succeeds<S: AsRef<OsStr>>(program: &str, args: &[S]) -> bool {
    run(program, args, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}
