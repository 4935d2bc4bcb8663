//! Utilities module - Status lines for the terminal
//!
//! Everything goes to stderr so rendered text on stdout can be piped into
//! another command.

use colored::*;

/// Status printer honoring `--quiet`
///
/// Errors are always shown; everything else is dropped in quiet mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    quiet: bool,
}

impl Status {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn step(&self, message: &str) {
        self.line("→".bright_blue(), message);
    }

    pub fn success(&self, message: &str) {
        self.line("✓".bright_green(), message);
    }

    pub fn warning(&self, message: &str) {
        self.line("⚠".bright_yellow(), message);
    }

    pub fn info(&self, message: &str) {
        self.line("ℹ".bright_cyan(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("   {} {}", "✗".bright_red(), message);
    }

    fn line(&self, marker: ColoredString, message: &str) {
        if !self.quiet {
            eprintln!("   {} {}", marker, message);
        }
    }
}
