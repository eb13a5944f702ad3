use chrono::{Local, TimeZone};
use colored::Colorize;
use igdb::api::MessageLevel;
use igdb::commands::CmdMessage;
use igdb::error::{CommandError, IgdbError};
use igdb::model::Record;
use unicode_width::UnicodeWidthChar;

const HANDLE_WIDTH: usize = 20;
const FOLLOWERS_WIDTH: usize = 10;
const DATE_WIDTH: usize = 19;
const COMMENT_WIDTH: usize = 30;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const HEADER: &str = "HANDLE               | FOLLOWERS  | LAST MODIFIED       | COMMENT";
const RULE: &str = "-----------------------------------------------------------------------------";

/// Info and success go to stdout, warnings and errors to stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

pub(super) fn print_error(err: &IgdbError) {
    let (stream, level, line) = error_report(err);
    let line = match level {
        MessageLevel::Warning => line.yellow(),
        _ => line.red(),
    };
    match stream {
        Stream::Stdout => println!("{}", line),
        Stream::Stderr => eprintln!("{}", line),
    }
}

/// Where an error goes and how it is prefixed. A missing command is reported
/// on stdout; trailing characters after a follower count are a warning.
fn error_report(err: &IgdbError) -> (Stream, MessageLevel, String) {
    match err {
        IgdbError::Invalid(CommandError::MissingCommand) => {
            (Stream::Stdout, MessageLevel::Error, format!("Error: {}", err))
        }
        IgdbError::Invalid(CommandError::FollowersTrailing(_)) => {
            (Stream::Stderr, MessageLevel::Warning, format!("Warning: {}", err))
        }
        _ => (Stream::Stderr, MessageLevel::Error, format!("Error: {}", err)),
    }
}

pub(super) fn print_records(records: &[Record]) {
    print!("{}", render_table(records));
}

pub(super) fn render_table(records: &[Record]) -> String {
    let mut out = format!("{}\n{}\n", HEADER, RULE);
    for record in records {
        out.push_str(&format_row(record));
        out.push('\n');
    }
    out
}

fn format_row(record: &Record) -> String {
    format!(
        "{} | {:<followers$} | {:<date$} | {}",
        fit_to_width(record.handle.as_str(), HANDLE_WIDTH),
        record.follower_count,
        format_date(record.date_last_modified),
        fit_to_width(record.comment.as_str(), COMMENT_WIDTH),
        followers = FOLLOWERS_WIDTH,
        date = DATE_WIDTH,
    )
}

/// Local time as `YYYY-MM-DD HH:MM`; timestamps chrono cannot represent
/// render as `?`.
fn format_date(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Cuts `s` to at most `width` display columns and pads it to exactly that.
fn fit_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(&" ".repeat(width - current_width));
    result
}
