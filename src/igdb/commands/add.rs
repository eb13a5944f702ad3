use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::model::{Comment, Handle, Record};
use crate::prompt::Prompt;
use log::debug;

use super::helpers::{current_time, read_validated_comment, validate_new_handle};

pub fn run<P: Prompt + ?Sized>(
    session: &mut Session,
    prompt: &mut P,
    handle: &str,
    followers: u64,
) -> Result<CmdResult> {
    validate_new_handle(session.db(), handle)?;
    let comment = read_validated_comment(prompt)?;

    let (handle, _) = Handle::from_text(handle);
    let (comment, _) = Comment::from_text(&comment);
    let record = Record {
        handle,
        comment,
        follower_count: followers,
        date_last_modified: current_time(),
    };

    debug!("event=add handle={} followers={}", record.handle, followers);
    session.db_mut().append(record.clone());
    session.mark_dirty();

    Ok(CmdResult::default().with_affected_records(vec![record]))
}
