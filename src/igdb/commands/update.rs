use crate::commands::{CmdResult, Session};
use crate::error::{CommandError, Result};
use crate::prompt::Prompt;
use log::debug;

use super::helpers::{current_time, read_validated_comment};

/// Overwrites comment, follower count and timestamp of an existing record.
pub fn run<P: Prompt + ?Sized>(
    session: &mut Session,
    prompt: &mut P,
    handle: &str,
    followers: u64,
) -> Result<CmdResult> {
    if session.db().lookup(handle).is_none() {
        return Err(CommandError::HandleNotFound(handle.to_string()).into());
    }
    let comment = read_validated_comment(prompt)?;

    let record = session
        .db_mut()
        .lookup_mut(handle)
        .ok_or_else(|| CommandError::HandleNotFound(handle.to_string()))?;
    record.comment.assign(&comment);
    record.follower_count = followers;
    record.date_last_modified = current_time();
    let updated = record.clone();

    debug!("event=update handle={} followers={}", handle, followers);
    session.mark_dirty();

    Ok(CmdResult::default().with_affected_records(vec![updated]))
}
