use std::io::{BufRead, Write};

use crate::error::NexusResult;

/// Free-form interactive input.
pub trait Confirmation {
    /// Shows `prompt` and reads one line. An empty answer yields `default`;
    /// `None` means input ended before anything was entered.
    fn input_with_default(&mut self, prompt: &str, default: &str) -> NexusResult<Option<String>>;
}

/// Line-based prompt over any reader/writer pair, usually stdin/stdout.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmation for LinePrompt<R, W> {
    fn input_with_default(&mut self, prompt: &str, default: &str) -> NexusResult<Option<String>> {
        write!(self.output, "{} ({}): ", prompt, default)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "tests/prompt_tests.rs"]
mod tests;
