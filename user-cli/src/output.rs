// Output formatting helpers for the menu
// ANSI styling is applied only when writing to a terminal

use std::io::{self, Write};

use user_service::User;

/// Writer for menu output, styled or plain.
pub struct Printer<W> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print a section header: "\n=== title ==="
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\n\x1b[1m=== {} ===\x1b[0m", title)
        } else {
            writeln!(self.out, "\n=== {} ===", title)
        }
    }

    /// Print a plain line
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Print a success message, with a checkmark on terminals
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\n\x1b[1;32m\u{2713}\x1b[0m {}", message)
        } else {
            writeln!(self.out, "\n{}", message)
        }
    }

    /// Print an error message: "Error: message"
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\x1b[1;31mError:\x1b[0m {}", message)
        } else {
            writeln!(self.out, "Error: {}", message)
        }
    }

    /// Print a warning message
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\x1b[33m!\x1b[0m {}", message)
        } else {
            writeln!(self.out, "{}", message)
        }
    }

    /// Print one user record
    pub fn user(&mut self, user: &User) -> io::Result<()> {
        writeln!(self.out, "{}", user)
    }

    /// Write raw text with no line terminator, then flush
    pub fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
