//! Line-oriented console seam.
//!
//! Every screen of the application talks to the user through the [`Console`]
//! trait. The binary wires it to the process terminal; tests wire it to an
//! in-memory reader and writer so whole sessions can be scripted.

use dialoguer::console::Term;
use std::io::{BufRead, StdinLock, Write};

use crate::errors::AppError;

/// Blocking, line-at-a-time console.
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns an [`ErrorKind::InputClosed`](crate::ErrorKind::InputClosed)
    /// error once the input stream is exhausted.
    fn read_line(&mut self) -> Result<String, AppError>;

    /// Writes text as-is and flushes it.
    fn write_str(&mut self, text: &str) -> Result<(), AppError>;

    /// Clears the visible screen. A no-op when no terminal is attached.
    fn clear_screen(&mut self) -> Result<(), AppError>;

    fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Shows `label` on the current line and returns the next input line.
    fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        self.write_str(label)?;
        self.read_line()
    }

    /// Shows `message` and waits for the user to press Enter.
    fn pause(&mut self, message: &str) -> Result<(), AppError> {
        self.write_str(message)?;
        self.read_line().map(|_| ())
    }
}

/// [`Console`] backed by any buffered reader and writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    term: Option<Term>,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            term: None,
        }
    }

    /// Enables screen clearing through the given terminal handle.
    pub fn with_terminal(mut self, term: Term) -> Self {
        self.term = Some(term);
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<StdinLock<'static>, Term> {
    /// Console over the process stdin and stdout.
    ///
    /// Screen clearing is only enabled when `clear_screen` is set and stdout
    /// is attached to a terminal.
    pub fn stdio(clear_screen: bool) -> Self {
        let stdout = Term::stdout();
        let console = Self::new(std::io::stdin().lock(), stdout.clone());
        if clear_screen && stdout.is_term() {
            console.with_terminal(stdout)
        } else {
            console
        }
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Result<String, AppError> {
        let mut bytes = Vec::new();
        let read = self.reader.read_until(b'\n', &mut bytes)?;
        if read == 0 {
            tracing::debug!("Console input reached end of stream");
            return Err(AppError::input_closed());
        }

        // Input is free text; bytes that are not UTF-8 become U+FFFD.
        let mut buf = String::from_utf8_lossy(&bytes).into_owned();
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    fn write_str(&mut self, text: &str) -> Result<(), AppError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), AppError> {
        if let Some(term) = &self.term {
            self.writer.flush()?;
            term.clear_screen()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut c = console("first\r\nsecond\nlast");

        assert_eq!(c.read_line().unwrap(), "first");
        assert_eq!(c.read_line().unwrap(), "second");
        assert_eq!(c.read_line().unwrap(), "last");
    }

    #[test]
    fn test_read_line_reports_closed_input() {
        let mut c = console("");

        let err = c.read_line().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputClosed);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut c = LineConsole::new(Cursor::new(b"Jos\xe9\r\nnext\n".to_vec()), Vec::new());

        assert_eq!(c.read_line().unwrap(), "Jos\u{FFFD}");
        assert_eq!(c.read_line().unwrap(), "next");
    }

    #[test]
    fn test_prompt_writes_label_then_reads() {
        let mut c = console("Alice\n");

        let name = c.prompt("Enter Name: ").unwrap();

        assert_eq!(name, "Alice");
        assert_eq!(String::from_utf8_lossy(c.writer()), "Enter Name: ");
    }

    #[test]
    fn test_clear_screen_without_terminal_writes_nothing() {
        let mut c = console("");

        c.clear_screen().unwrap();

        assert!(c.writer().is_empty());
    }
}
