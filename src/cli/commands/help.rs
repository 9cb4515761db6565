//! Legacy `-h` syntax text.

use crate::error::Result;
use crate::selection::Package;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const SYNTAX: &str = "Syntax: copas [OPTIONS] [-h] [-s | -S] [-t] [nobinary] [notesting] [PACKAGE ...]";

const TOKENS: &[(&str, &str)] = &[
    ("-h", "print this message and exit"),
    ("-s", "also fetch sources (binaries are still downloaded)"),
    ("-S", "fetch sources only (no binaries)"),
    ("-t", "only run the Python support checks"),
    ("nobinary", "do not download binary distributions"),
    ("notesting", "skip the Python support checks"),
];

/// Prints the token syntax.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    /// The full help text.
    pub fn text() -> String {
        let mut out = String::new();
        out.push_str(SYNTAX);
        out.push_str("\n\n");
        for (token, description) in TOKENS {
            out.push_str(&format!("  {:<12}{}\n", token, description));
        }

        let names: Vec<&str> = Package::ALL.iter().map(|p| p.name()).collect();
        out.push_str("\nPackages (upper or lower case; none given means all):\n");
        out.push_str(&format!("  {}\n", names.join(" ")));
        out.push_str("\nRun 'copas --help' for the long options.\n");
        out
    }
}

impl Command for HelpCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        print!("{}", Self::text());
        Ok(CommandResult::success())
    }
}
