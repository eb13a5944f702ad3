use super::{csv, DataStore, Database};
use crate::commands::CmdMessage;
use crate::error::{IgdbError, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE: &str = "database.csv";

/// CSV file backend.
///
/// Loads from and saves to `path`. When `path` cannot be opened for writing,
/// saves go to `fallback` instead; failing that is fatal.
pub struct FileStore {
    path: PathBuf,
    fallback: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: PathBuf::from(DEFAULT_DB_FILE),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallback = fallback.into();
        self
    }

    fn write_to(&self, file: File, db: &Database) -> io::Result<()> {
        csv::encode(db, BufWriter::new(file))
    }
}

impl DataStore for FileStore {
    fn load(&self, db: &mut Database) -> Result<Vec<CmdMessage>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("event=load status=missing path={}", self.path.display());
                return Ok(vec![CmdMessage::warning(format!(
                    "No file {p} exists, failed to read from {p}, returning early",
                    p = self.path.display()
                ))]);
            }
            Err(e) => return Err(IgdbError::Io(e)),
        };

        let before = db.len();
        let messages = csv::decode(BufReader::new(file), db)?;
        debug!(
            "event=load status=ok path={} records={}",
            self.path.display(),
            db.len() - before
        );
        Ok(messages)
    }

    fn save(&mut self, db: &Database) -> Result<Vec<CmdMessage>> {
        let mut messages = Vec::new();

        let (file, target) = match File::create(&self.path) {
            Ok(file) => (file, &self.path),
            Err(e) => {
                warn!(
                    "event=save_fallback path={} fallback={} reason={}",
                    self.path.display(),
                    self.fallback.display(),
                    e
                );
                messages.push(CmdMessage::warning(format!(
                    "Unable to open or create file '{}'. Trying to create '{}' instead.",
                    self.path.display(),
                    self.fallback.display()
                )));
                let file = File::create(&self.fallback).map_err(|source| IgdbError::Unwritable {
                    path: self.fallback.clone(),
                    source,
                })?;
                (file, &self.fallback)
            }
        };

        self.write_to(file, db)?;
        debug!(
            "event=save status=ok path={} records={}",
            target.display(),
            db.len()
        );
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_without_creating_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        let store = FileStore::new(&path);

        let mut db = Database::new();
        let messages = store.load(&mut db).unwrap();

        assert!(db.is_empty());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("No file"));
        assert!(!path.exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        let mut store = FileStore::new(&path);

        let mut db = Database::new();
        db.append(Record::new("@alice", 20, "world", 1_700_000_000));
        assert!(store.save(&db).unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "@alice,20,world,1700000000\n"
        );

        let mut loaded = Database::new();
        store.load(&mut loaded).unwrap();
        assert_eq!(loaded, db);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        fs::write(&path, "@old,1,stale,1\n@older,2,stale,2\n").unwrap();

        let mut db = Database::new();
        db.append(Record::new("@new", 3, "fresh", 3));
        FileStore::new(&path).save(&db).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "@new,3,fresh,3\n");
    }

    #[test]
    fn unwritable_path_falls_back() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("no-such-dir").join("database.csv");
        let fallback = dir.path().join("fallback.csv");
        let mut store = FileStore::new(&bad).with_fallback(&fallback);

        let mut db = Database::new();
        db.append(Record::new("@bob", 1, "hi", 2));
        let messages = store.save(&db).unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("Trying to create"));
        assert_eq!(fs::read_to_string(&fallback).unwrap(), "@bob,1,hi,2\n");
    }

    #[test]
    fn unwritable_fallback_is_fatal() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("missing").join("a.csv");
        let worse = dir.path().join("missing").join("b.csv");
        let mut store = FileStore::new(&bad).with_fallback(&worse);

        let err = store.save(&Database::new()).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, IgdbError::Unwritable { .. }));
    }
}
