//! Line-oriented prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Stderr, Write};
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};

/// Prompting front end for the shell.
///
/// Every prompt reads exactly one line. End of input surfaces as
/// [`Error::InputClosed`]. Failure reports go to a separate error stream,
/// standard error unless another one is given.
#[derive(Debug)]
pub struct Terminal<R, W, E = Stderr> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wrap an input and an output stream, reporting failures on stderr.
    pub fn new(input: R, output: W) -> Self {
        Self::with_errors(input, output, io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    /// Wrap an input, an output and an error stream.
    pub fn with_errors(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Read one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line reads as an unrecognised reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or [`Error::Io`] if
    /// reading fails.
    pub fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(Error::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!("read {:?}", line);
        Ok(line)
    }

    /// Print `label: ` and read the reply verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written or input is closed.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like [`Terminal::prompt`], with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written or input is closed.
    pub fn prompt_trimmed(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.trim().to_string())
    }

    /// Prompt until the reply parses as a `T`.
    ///
    /// Each failed attempt prints `Please enter a valid number for <field>.`
    /// and asks again; there is no retry limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written or input is closed.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T> {
        loop {
            let reply = self.prompt(label)?;
            match reply.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(format_args!("Please enter a valid number for {field}."))?,
            }
        }
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print one line on the error stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the error stream cannot be written.
    pub fn report(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.errors, "{line}")?;
        self.errors.flush()?;
        Ok(())
    }

    /// Flush buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be flushed.
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<&str>, Vec<u8>> {
        Terminal::new(Cursor::new(input), Vec::new())
    }

    fn transcript<R, E>(terminal: &Terminal<R, Vec<u8>, E>) -> String {
        String::from_utf8(terminal.output.clone()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut t = terminal("one\ntwo\r\nthree");
        assert_eq!(t.read_line().unwrap(), "one");
        assert_eq!(t.read_line().unwrap(), "two");
        assert_eq!(t.read_line().unwrap(), "three");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut t = terminal("");
        assert!(matches!(t.read_line(), Err(Error::InputClosed)));
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut t = Terminal::new(Cursor::new(&b"\xff\xfe\nnext\n"[..]), Vec::new());
        assert_eq!(t.read_line().unwrap(), "\u{fffd}\u{fffd}");
        assert_eq!(t.read_line().unwrap(), "next");
    }

    #[test]
    fn test_prompt_number_retries_after_invalid_utf8() {
        let mut t = Terminal::new(Cursor::new(&b"\xc3\n4\n"[..]), Vec::new());
        let semester: i32 = t.prompt_number("Semester", "semester").unwrap();

        assert_eq!(semester, 4);
        assert!(transcript(&t).contains("Please enter a valid number for semester."));
    }

    #[test]
    fn test_report_goes_to_error_stream() {
        let mut t = Terminal::with_errors(Cursor::new(""), Vec::new(), Vec::new());
        t.report("Save failed: disk full").unwrap();

        assert_eq!(transcript(&t), "");
        assert_eq!(String::from_utf8(t.errors).unwrap(), "Save failed: disk full\n");
    }

    #[test]
    fn test_read_empty_line() {
        let mut t = terminal("\n");
        assert_eq!(t.read_line().unwrap(), "");
    }

    #[test]
    fn test_prompt_keeps_whitespace() {
        let mut t = terminal("  Ana  \n");
        assert_eq!(t.prompt("Name").unwrap(), "  Ana  ");
        assert_eq!(transcript(&t), "Name: ");
    }

    #[test]
    fn test_prompt_trimmed() {
        let mut t = terminal("  S1 \n");
        assert_eq!(t.prompt_trimmed("ID").unwrap(), "S1");
    }

    #[test]
    fn test_prompt_number_retries_until_valid() {
        let mut t = terminal("three\n\n3\n");
        let semester: i32 = t.prompt_number("Semester", "semester").unwrap();

        assert_eq!(semester, 3);
        assert_eq!(
            transcript(&t),
            "Semester: Please enter a valid number for semester.\n\
             Semester: Please enter a valid number for semester.\n\
             Semester: "
        );
    }

    #[test]
    fn test_prompt_number_float() {
        let mut t = terminal("8,5\n 8.5 \n");
        let gpa: f64 = t.prompt_number("CGPA", "CGPA").unwrap();
        assert!((gpa - 8.5).abs() < f64::EPSILON);
        assert!(transcript(&t).contains("Please enter a valid number for CGPA."));
    }

    #[test]
    fn test_prompt_number_input_closed() {
        let mut t = terminal("x\n");
        let result: Result<i32> = t.prompt_number("Semester", "semester");
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_say() {
        let mut t = terminal("");
        t.say("Added.").unwrap();
        t.say(format_args!("{} rows", 2)).unwrap();
        assert_eq!(transcript(&t), "Added.\n2 rows\n");
    }
}
