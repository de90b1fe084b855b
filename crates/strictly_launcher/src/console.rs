//! Line-oriented terminal I/O.

use crate::LauncherError;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Prompt/response console over any reader and writer.
///
/// The binary wraps locked stdin/stdout; tests drive it with a
/// [`std::io::Cursor`] and a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, LauncherError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), LauncherError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Splits the console back into its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
