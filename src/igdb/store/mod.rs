//! # Storage Layer
//!
//! [`Database`] is the in-memory record store: an ordered, growable array of
//! [`Record`]s with positional access and lookup by handle. It knows nothing
//! about files.
//!
//! Persistence sits behind the [`DataStore`] trait so the command layer can be
//! exercised without touching the filesystem:
//!
//! - [`fs::FileStore`]: production backend, one CSV file plus a fixed fallback
//!   file for saves.
//! - [`memory::InMemoryStore`]: test backend that keeps the encoded CSV text.
//!
//! Both go through [`csv`] for the line format.

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Record;

pub mod csv;
pub mod fs;
pub mod memory;

pub const INITIAL_CAPACITY: usize = 4;

/// Load/save seam between the interpreter and a persistence medium.
pub trait DataStore {
    /// Appends every persisted record to `db`, in stored order.
    fn load(&self, db: &mut Database) -> Result<Vec<CmdMessage>>;

    /// Replaces the persisted contents with `db`.
    fn save(&mut self, db: &Database) -> Result<Vec<CmdMessage>>;
}

/// Ordered collection of records. Handle uniqueness is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    records: Vec<Record>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends at the end, growing the backing array geometrically when full.
    pub fn append(&mut self, record: Record) {
        if self.records.len() == self.records.capacity() {
            let grow_by = self.records.capacity().max(INITIAL_CAPACITY);
            self.records.reserve_exact(grow_by);
        }
        self.records.push(record);
    }

    pub fn index(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// First record whose handle equals `handle` exactly.
    pub fn lookup(&self, handle: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.handle == handle)
    }

    pub fn lookup_mut(&mut self, handle: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.handle == handle)
    }

    /// Releases the backing storage. Safe to call repeatedly.
    pub fn free(&mut self) {
        self.records = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
