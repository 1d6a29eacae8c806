use super::Reader;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Non-interactive input: piped stdin or a script file.
///
/// The `> ` and `Enter operand <n>: ` prompts are dropped here, so stdout
/// carries only the banner, `Result:`/`Error:` lines, history listings and
/// the farewell. Only `PromptReader` shows prompts.
pub struct IOReader<R>(Lines<R>);

impl<R: BufRead> Reader for IOReader<R> {
    fn next_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        match self.0.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}

impl<R: BufRead> IOReader<R> {
    pub fn new(reader: R) -> Self {
        Self(reader.lines())
    }
}

impl IOReader<BufReader<File>> {
    pub fn new_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open the script: {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}
