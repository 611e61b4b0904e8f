// Prefix Logger
// Writes "[<prefix>] <message>" lines to stdout or any writer

use std::io::{self, Write};

const DEFAULT_PREFIX: &str = "DEFAULT";

/// Simple logger that tags every line with a bracketed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Logger with the `DEFAULT` prefix
    pub fn create_default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `[prefix]`, rebuilt on each call
    pub fn formatted_prefix(&self) -> String {
        format!("[{}]", self.prefix)
    }

    pub fn log(&self, message: &str) {
        println!("{} {}", self.formatted_prefix(), message);
    }

    pub fn log_to<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{} {}", self.formatted_prefix(), message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::create_default()
    }
}
