use super::{csv, DataStore, Database};
use crate::commands::CmdMessage;
use crate::error::Result;
use std::io::Cursor;

/// Backend that keeps the CSV text in memory. Used by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: String,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing file contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            saves: 0,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, db: &mut Database) -> Result<Vec<CmdMessage>> {
        Ok(csv::decode(Cursor::new(self.contents.as_bytes()), db)?)
    }

    fn save(&mut self, db: &Database) -> Result<Vec<CmdMessage>> {
        let mut out = Vec::new();
        csv::encode(db, &mut out)?;
        self.contents = String::from_utf8_lossy(&out).into_owned();
        self.saves += 1;
        Ok(Vec::new())
    }
}
