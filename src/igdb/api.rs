//! # API Facade
//!
//! [`IgdbApi`] is the single entry point for UI clients. It owns the
//! persistence backend and the interpreter [`Session`], parses each input line
//! into a [`Command`] and dispatches to the matching `commands::*::run`.
//!
//! Like the command layer it never prints. The caller renders the returned
//! [`CmdResult`] and decides what to do with errors: [`IgdbError::is_fatal`]
//! separates rejected commands from conditions that must end the process.
//!
//! [`IgdbError::is_fatal`]: crate::error::IgdbError::is_fatal

use crate::command::Command;
use crate::commands::{self, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::prompt::Prompt;
use crate::store::{DataStore, Database};
use log::{debug, info};

pub struct IgdbApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> IgdbApi<S> {
    /// Loads the database from `store` and starts a session.
    pub fn open(store: S) -> Result<(Self, CmdResult)> {
        let mut db = Database::new();
        let messages = store.load(&mut db)?;
        info!("event=open records={}", db.len());

        let mut result = CmdResult::default().with_messages(messages);
        result.add_message(CmdMessage::info(format!("Loaded {} records.", db.len())));

        let api = Self {
            store,
            session: Session::new(db),
        };
        Ok((api, result))
    }

    /// Parses and runs one command line. `prompt` supplies follow-up input
    /// such as the comment for `add` and `update`.
    pub fn execute<P: Prompt + ?Sized>(&mut self, line: &str, prompt: &mut P) -> Result<CmdResult> {
        let command = Command::parse(line)?;
        debug!("event=command name={}", command.name());

        match command {
            Command::List => commands::list::run(&self.session),
            Command::Save => commands::save::run(&mut self.session, &mut self.store),
            Command::Add { handle, followers } => {
                commands::add::run(&mut self.session, prompt, handle, followers)
            }
            Command::Update { handle, followers } => {
                commands::update::run(&mut self.session, prompt, handle, followers)
            }
            Command::Exit { arg } => commands::exit::run(&mut self.session, arg),
        }
    }

    /// Ends the session without the exit protocol, e.g. when input runs out.
    pub fn shutdown(&mut self) {
        info!(
            "event=shutdown dirty={} records={}",
            self.session.is_dirty(),
            self.session.db().len()
        );
        self.session.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    pub fn database(&self) -> &Database {
        self.session.db()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{MessageLevel, SessionState};
