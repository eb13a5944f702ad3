//! # Command Layer
//!
//! One module per interpreter command. Each `run` function takes the
//! [`Session`] (and whatever else it needs), performs the mutation, and returns
//! a [`CmdResult`]. Rejections come back as [`CommandError`]s wrapped in
//! [`crate::error::IgdbError::Invalid`]; nothing here prints.
//!
//! [`CommandError`]: crate::error::CommandError

use crate::model::Record;
use crate::store::Database;

pub mod add;
pub mod exit;
pub mod helpers;
pub mod list;
pub mod save;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exiting,
}

/// Interpreter context: the database, its dirty flag and the run state.
#[derive(Debug)]
pub struct Session {
    db: Database,
    dirty: bool,
    state: SessionState,
}

impl Session {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            dirty: false,
            state: SessionState::Running,
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Frees the database and stops the session. Unsaved changes are dropped.
    pub fn shutdown(&mut self) {
        self.db.free();
        self.state = SessionState::Exiting;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    /// Rows for the listing table. `None` unless the command lists.
    pub listed_records: Option<Vec<Record>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_messages(mut self, messages: Vec<CmdMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = Some(records);
        self
    }
}
