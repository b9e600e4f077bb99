//! Interactive parameter collection.
//!
//! Every loop re-prompts on malformed input instead of failing; only a
//! closed input stream aborts the run. Generic over `BufRead`/`Write`
//! so the loops are testable without a console.

use std::io::{BufRead, Write};

use fenceline_core::config::ScanConfig;
use fenceline_core::constants::DEFAULT_MULTIPLIER;
use fenceline_core::errors::PromptError;
use fenceline_core::types::column;

pub struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a sheet from an enumerated list; returns the 1-based
    /// index.
    pub fn sheet_index(&mut self, names: &[&str]) -> Result<usize, PromptError> {
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, name)?;
        }
        loop {
            let line = self.ask("sheet number to scan: ")?;
            match line.parse::<usize>() {
                Ok(n) if (1..=names.len()).contains(&n) => return Ok(n),
                _ => writeln!(
                    self.output,
                    "invalid sheet number, expected 1..={}",
                    names.len()
                )?,
            }
        }
    }

    /// Prompt for a legal column letter (A..XFD), re-prompting until one
    /// is given. Returns the canonical uppercase form.
    pub fn column_letter(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            let line = self.ask(prompt)?;
            match column::column_index(&line) {
                Ok(_) => return Ok(line.to_ascii_uppercase()),
                Err(e) => writeln!(self.output, "{e}; expected a letter A..XFD")?,
            }
        }
    }

    /// Prompt for the 1-based start row.
    pub fn start_row(&mut self) -> Result<u32, PromptError> {
        loop {
            let line = self.ask("start row: ")?;
            match line.parse::<u32>() {
                Ok(n) if n > 0 => return Ok(n),
                _ => writeln!(self.output, "start row must be a positive integer")?,
            }
        }
    }

    /// Prompt for the fence multiplier; empty input takes the default.
    pub fn multiplier(&mut self) -> Result<f64, PromptError> {
        let prompt = format!(
            "IQR multiplier (default {DEFAULT_MULTIPLIER}, larger admits more spread): "
        );
        loop {
            let line = self.ask(&prompt)?;
            if line.is_empty() {
                return Ok(DEFAULT_MULTIPLIER);
            }
            match line.parse::<f64>() {
                Ok(m) if m.is_finite() && m >= 0.0 => return Ok(m),
                _ => writeln!(self.output, "multiplier must be a non-negative number")?,
            }
        }
    }

    /// Prompt for every scan parameter the config still lacks.
    ///
    /// Parameters already supplied by flags or the config file are not
    /// asked again. The sheet prompt is skipped for single-sheet
    /// workbooks.
    pub fn fill_missing(
        &mut self,
        config: &mut ScanConfig,
        sheet_names: &[&str],
    ) -> Result<(), PromptError> {
        if config.sheet.is_none() && sheet_names.len() > 1 {
            config.sheet = Some(self.sheet_index(sheet_names)?);
        }
        if config.start_column.is_none() {
            config.start_column = Some(self.column_letter("start column letter: ")?);
        }
        if config.end_column.is_none() {
            config.end_column = Some(self.column_letter("end column letter: ")?);
        }
        if config.start_row.is_none() {
            config.start_row = Some(self.start_row()?);
        }
        if config.multiplier.is_none() {
            config.multiplier = Some(self.multiplier()?);
        }
        Ok(())
    }
}
