extern crate rustyline;

use super::Reader;
use crate::op::CANCEL_TOKEN;
use rustyline::{error::ReadlineError, Editor};

#[derive(Debug)]
pub struct PromptReader(Editor<()>);

impl Reader for PromptReader {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(s) => {
                if !s.trim().is_empty() {
                    self.0.add_history_entry(s.as_str());
                }
                Ok(Some(s))
            }
            // Ctrl-C drops whatever is pending.
            Err(ReadlineError::Interrupted) => Ok(Some(String::from(CANCEL_TOKEN))),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl PromptReader {
    pub fn new() -> Self {
        Self(Editor::new())
    }
}
