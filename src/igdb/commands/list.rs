use crate::commands::{CmdResult, Session};
use crate::error::Result;

pub fn run(session: &Session) -> Result<CmdResult> {
    let records = session.db().iter().cloned().collect();
    Ok(CmdResult::default().with_listed_records(records))
}
