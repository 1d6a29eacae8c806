mod io;
mod prompt;
mod state;

pub use io::IOReader;
pub use prompt::PromptReader;
use state::SessionState;

use crate::history::History;
use anyhow::Context;
use std::io::Write;
use tracing::{debug, trace};
use unindent::unindent;

pub struct Session<T, W> {
    reader: T,
    out: W,
    settings: Settings,
    state: SessionState,
}

/// Upper bound on `Settings::precision`; larger values are clamped.
pub const MAX_PRECISION: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Digits after the decimal point in `Result:` lines.
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

pub trait Reader {
    /// `Ok(None)` once the input is exhausted.
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

impl<T: Reader, W: Write> Session<T, W> {
    pub fn new(reader: T, out: W, settings: Settings) -> Self {
        Self {
            reader,
            out,
            settings,
            state: SessionState::default(),
        }
    }

    pub fn banner(&mut self) -> anyhow::Result<()> {
        let text = unindent(
            "
            Interactive calculator
            Commands:
              + - * / ^          two operands
              sqrt sin cos tan   one operand (angles in degrees)
              history            list past calculations
              c                  cancel the current operation
              exit               quit
            ",
        );
        write!(self.out, "{}", text).context("Failed to write the banner.")?;
        Ok(())
    }

    pub fn next(&mut self) -> anyhow::Result<bool> {
        let prompt = self.state.prompt();
        let line = self
            .reader
            .next_line(&prompt)
            .context("Failed to read a line.")?;

        // Transitions write into a buffer so the new state is kept even
        // when the real output fails.
        let mut buf = Vec::new();
        let state = std::mem::take(&mut self.state);
        self.state = match line {
            Some(line) => {
                trace!(%line, "input");
                state.advance(&line, &self.settings, &mut buf)?
            }
            None => {
                debug!("end of input");
                state.terminate(&mut buf)?
            }
        };
        self.out
            .write_all(&buf)
            .and_then(|()| self.out.flush())
            .context("Failed to write the output.")?;

        Ok(!self.state.is_terminated())
    }

    pub fn all(&mut self) -> anyhow::Result<()> {
        loop {
            if !self.next()? {
                break;
            }
        }

        debug!(entries = self.history().len(), "session finished");
        Ok(())
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
