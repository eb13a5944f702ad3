use crate::commands::{CmdResult, Session};
use crate::error::{CommandError, Result};

pub const FORCE_ARG: &str = "fr";

/// Leaves the session, refusing while there are unsaved changes unless forced
/// with `exit fr`.
pub fn run(session: &mut Session, arg: Option<&str>) -> Result<CmdResult> {
    let forced = arg == Some(FORCE_ARG);

    if session.is_dirty() && !forced {
        return Err(CommandError::UnsavedChanges.into());
    }
    if !session.is_dirty() && arg.is_some() && !forced {
        return Err(CommandError::UnexpectedArguments("exit").into());
    }

    session.shutdown();
    Ok(CmdResult::default())
}
