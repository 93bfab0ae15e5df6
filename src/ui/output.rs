//! Output abstraction layer
//!
//! Backend-agnostic interface for status output, so commands can print to a
//! terminal or stay silent in quiet mode.

use colored::Colorize;

/// Sink for command output
///
/// # Examples
///
/// ```no_run
/// use menufind::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Margherita Pizza  $14");
/// output.success("All fields valid");
/// output.error("Email address is required.");
/// ```
pub trait OutputWriter {
    /// Plain output, never suppressed
    fn write(&self, message: &str);

    fn error(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    /// Secondary output (rendered dimmed)
    fn info(&self, message: &str);

    /// Write a message at the given level
    fn message(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => self.write(message),
            MessageLevel::Error => self.error(message),
            MessageLevel::Success => self.success(message),
            MessageLevel::Warning => self.warning(message),
            MessageLevel::Info => self.info(message),
        }
    }
}

/// Severity of a message, shared by the CLI writer and the browser status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Terminal writer: errors go to stderr, everything else to stdout
///
/// In quiet mode only normal output and errors are written; decoration
/// (success, warning, info) is suppressed for scripting.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that suppresses informational output
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "!".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}
