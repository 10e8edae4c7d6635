//! Text I/O seam
//!
//! The player reports every outcome as a line of text and, after a
//! successful search, reads one line back. `Console` abstracts both so the
//! same player drives a terminal, a test transcript or an embedding UI.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented text surface
pub trait Console {
    /// Emit one line of status text
    fn display(&mut self, line: &str);

    /// Block for one line of input
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    fn prompt_line(&mut self) -> Option<String>;
}

/// Console over the process's stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new stdio console
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn display(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::warn!("Failed to write to stdout: {}", e);
        }
    }

    fn prompt_line(&mut self) -> Option<String> {
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush stdout: {}", e);
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

/// In-memory console
///
/// Records every displayed line and answers prompts from a script.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    output: Vec<String>,
    input: VecDeque<String>,
}

impl MemoryConsole {
    /// Create a console with no scripted input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that answers prompts with `input`, in order
    pub fn with_input<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: Vec::new(),
            input: input.into_iter().map(Into::into).collect(),
        }
    }

    /// Queue another input line
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// All lines displayed so far
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// Most recent line
    pub fn last_line(&self) -> Option<&str> {
        self.output.last().map(String::as_str)
    }

    /// Take the recorded lines, leaving the transcript empty
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Number of scripted lines not yet consumed
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for MemoryConsole {
    fn display(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn prompt_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_console_records_lines() {
        let mut console = MemoryConsole::new();
        console.display("first");
        console.display("second");

        assert_eq!(console.lines(), &["first", "second"]);
        assert_eq!(console.last_line(), Some("second"));
        assert_eq!(console.take_output().len(), 2);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn memory_console_replays_input() {
        let mut console = MemoryConsole::with_input(["1", "no"]);
        console.push_input("later");

        assert_eq!(console.prompt_line().as_deref(), Some("1"));
        assert_eq!(console.prompt_line().as_deref(), Some("no"));
        assert_eq!(console.pending_input(), 1);
        assert_eq!(console.prompt_line().as_deref(), Some("later"));
        assert_eq!(console.prompt_line(), None);
    }
}
