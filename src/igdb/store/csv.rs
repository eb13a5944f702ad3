//! Line codec for the database file.
//!
//! One record per line: `handle,followerCount,comment,dateLastModified\n`.
//! There is no header and no quoting; the interpreter's validation keeps commas
//! and newlines out of stored fields.
//!
//! Decoding follows the lenient field parsers in [`crate::fields`]: empty
//! tokens are skipped, at most four are used, and missing trailing fields keep
//! their defaults.
//!
//! Lines that are not valid UTF-8 are still loaded, with each invalid sequence
//! replaced by U+FFFD and a warning naming the line. The replacement is what
//! gets truncated and written back on the next save.

use crate::commands::CmdMessage;
use crate::fields::{parse_comment, parse_date_last_modified, parse_follower_count, parse_handle};
use crate::model::Record;
use crate::store::Database;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

pub const DELIMITER: char = ',';

/// Decodes one line (with or without its trailing newline).
pub fn decode_record(line: &str) -> (Record, Vec<CmdMessage>) {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let mut tokens = line.split(DELIMITER).filter(|token| !token.is_empty());

    let mut record = Record::default();
    let messages = [
        parse_handle(tokens.next(), &mut record),
        parse_follower_count(tokens.next(), &mut record),
        parse_comment(tokens.next(), &mut record),
        parse_date_last_modified(tokens.next(), &mut record),
    ]
    .into_iter()
    .flatten()
    .collect();

    (record, messages)
}

pub fn encode_record(record: &Record) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}\n",
        record.handle,
        record.follower_count,
        record.comment,
        record.date_last_modified,
        d = DELIMITER
    )
}

/// Appends every non-empty line of `reader` to `db` as a record.
pub fn decode<R: BufRead>(mut reader: R, db: &mut Database) -> io::Result<Vec<CmdMessage>> {
    let mut messages = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            messages.push(CmdMessage::warning(format!(
                "Line {} is not valid UTF-8, invalid bytes were replaced.",
                line_no
            )));
        }
        if line == "\n" {
            continue;
        }

        let (record, line_messages) = decode_record(&line);
        messages.extend(line_messages);
        db.append(record);
    }

    Ok(messages)
}

pub fn encode<W: Write>(db: &Database, mut writer: W) -> io::Result<()> {
    for record in db {
        writer.write_all(encode_record(record).as_bytes())?;
    }
    writer.flush()
}
