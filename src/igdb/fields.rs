//! Field parsers used when loading records from disk.
//!
//! Each parser takes an optional raw token and writes its contribution into a
//! [`Record`]. An absent token leaves the field untouched. Parsers never print:
//! warnings and errors come back as [`CmdMessage`]s for the caller to surface.
//!
//! The numeric parsers are deliberately lenient (leading digits win, trailing
//! junk is ignored). Interactive `add`/`update` arguments go through the strict
//! parser in [`crate::command`] instead.

use crate::commands::CmdMessage;
use crate::model::Record;

pub fn parse_handle(token: Option<&str>, record: &mut Record) -> Option<CmdMessage> {
    let token = token?;
    if record.handle.assign(token).is_truncated() {
        return Some(CmdMessage::warning(
            "Your handle is too long it will be truncated.",
        ));
    }
    None
}

pub fn parse_comment(token: Option<&str>, record: &mut Record) -> Option<CmdMessage> {
    let token = token?;
    if record.comment.assign(token).is_truncated() {
        return Some(CmdMessage::warning(
            "Your comment is too long it will be truncated.",
        ));
    }
    None
}

pub fn parse_follower_count(token: Option<&str>, record: &mut Record) -> Option<CmdMessage> {
    let token = token?;
    match parse_leading_u64(token) {
        Some(followers) => {
            record.follower_count = followers;
            None
        }
        None => Some(CmdMessage::error(
            "Error: No digits were found in followerCount.",
        )),
    }
}

pub fn parse_date_last_modified(token: Option<&str>, record: &mut Record) -> Option<CmdMessage> {
    let token = token?;
    match parse_leading_u64(token) {
        Some(date) => {
            record.date_last_modified = date;
            None
        }
        None => Some(CmdMessage::error(
            "Error: No digits were found in dateLastModified.",
        )),
    }
}

/// Reads the leading unsigned decimal number of `token`.
///
/// Leading ASCII whitespace and a single `+` are skipped; parsing stops at the
/// first non-digit. Values past `u64::MAX` saturate. Returns `None` when no
/// digit could be consumed.
pub(crate) fn parse_leading_u64(token: &str) -> Option<u64> {
    let trimmed = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    Some(unsigned[..end].bytes().fold(0u64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    }))
}
