//! Line-based console prompts.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

/// Asks questions on `output` and reads one line of `input` per answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and return the next input line without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        anyhow::ensure!(read > 0, "unexpected end of input while waiting for: {prompt}");

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the answer parses as `T` and satisfies `accept`.
    pub fn ask_parsed<T, F>(&mut self, prompt: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    tracing::debug!(answer = %answer, "rejected input");
                    writeln!(self.output, "Invalid input, please try again.")?;
                }
            }
        }
    }
}
