//! # Console
//!
//! Line-based prompt I/O for the menu loop.
//!
//! Generic over reader and writer so handlers can be exercised in tests
//! with scripted input and a captured output buffer.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented console wrapper.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process's stdin/stdout.
    pub fn stdio() -> Self {
        Console {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console over arbitrary reader/writer (tests).
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Writes a prompt (no newline) and reads one line of input.
    ///
    /// The trailing newline is stripped; other whitespace is preserved.
    /// A closed input stream is an error, never an infinite loop.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Reads a numeric menu choice, re-prompting until one parses.
    ///
    /// Non-numeric input is rejected with a message and re-prompted,
    /// never escalated.
    pub fn read_choice(&mut self) -> io::Result<i32> {
        loop {
            let line = self.prompt("Please make your choice: ")?;
            match line.trim().parse::<i32>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Your input is invalid!")?,
            }
        }
    }

    /// Direct access to the output stream, for tabular query results.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_newline() {
        let mut c = console("alice\n");
        assert_eq!(c.prompt("\tEnter name: ").unwrap(), "alice");
    }

    #[test]
    fn test_prompt_errors_on_eof() {
        let mut c = console("");
        assert!(c.prompt("\tEnter name: ").is_err());
    }

    #[test]
    fn test_read_choice_skips_invalid_input() {
        let mut c = console("abc\n\n9\n");
        assert_eq!(c.read_choice().unwrap(), 9);

        let output = String::from_utf8(c.output).unwrap();
        assert_eq!(output.matches("Your input is invalid!").count(), 2);
    }

    #[test]
    fn test_read_choice_accepts_padded_number() {
        let mut c = console(" 2 \n");
        assert_eq!(c.read_choice().unwrap(), 2);
    }
}
