use crate::error::CommandError;
use crate::model::HANDLE_CAPACITY;
use crate::prompt::Prompt;
use crate::store::Database;
use chrono::Utc;

/// Size of the comment input buffer. Only the first `COMMENT_BUFFER - 1` bytes
/// of a comment line are considered; the rest of that line is discarded.
pub const COMMENT_BUFFER: usize = 256;
pub const COMMENT_PROMPT: &str = "Comment> ";

/// Checks a handle for `add`, in the order the errors are reported.
pub fn validate_new_handle(db: &Database, handle: &str) -> Result<(), CommandError> {
    if db.lookup(handle).is_some() {
        return Err(CommandError::DuplicateHandle(handle.to_string()));
    }
    // Only the byte after the leading character is checked here.
    if handle.len() == 1 {
        return Err(CommandError::EmptyHandle);
    }
    if !handle.starts_with('@') {
        return Err(CommandError::HandleMissingAt);
    }
    if handle.len() >= HANDLE_CAPACITY {
        return Err(CommandError::HandleTooLong);
    }
    if handle.chars().any(is_handle_separator) {
        return Err(CommandError::HandleInvalidChars);
    }
    Ok(())
}

/// Commas plus the ASCII whitespace set, vertical tab included.
fn is_handle_separator(c: char) -> bool {
    c == ',' || c.is_ascii_whitespace() || c == '\x0b'
}

/// Prompts for a comment and validates it.
///
/// End of input or a read error yields [`CommandError::CommentUnreadable`].
pub fn read_validated_comment<P: Prompt + ?Sized>(prompt: &mut P) -> Result<String, CommandError> {
    let line = match prompt.read_line(COMMENT_PROMPT) {
        Ok(Some(line)) => line,
        Ok(None) | Err(_) => return Err(CommandError::CommentUnreadable),
    };
    validate_comment(&line).map(str::to_string)
}

/// Validates one raw comment line and returns the accepted text.
pub fn validate_comment(line: &str) -> Result<&str, CommandError> {
    let mut limit = line.len().min(COMMENT_BUFFER - 1);
    while !line.is_char_boundary(limit) {
        limit -= 1;
    }
    let buffered = &line[..limit];

    if matches!(buffered.as_bytes().first().copied(), None | Some(b'\n') | Some(b' ')) {
        return Err(CommandError::EmptyComment);
    }

    let comment = match buffered.find('\n') {
        Some(end) => &buffered[..end],
        None => buffered,
    };

    if comment.contains(',') {
        return Err(CommandError::CommentHasComma);
    }
    if comment.bytes().any(|b| !(32..=126).contains(&b)) {
        return Err(CommandError::CommentInvalidChars);
    }
    Ok(comment)
}

/// Current Unix time in seconds.
pub fn current_time() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::prompt::ScriptedPrompt;

    fn db_with(handle: &str) -> Database {
        let mut db = Database::new();
        db.append(Record::new(handle, 1, "x", 0));
        db
    }

    #[test]
    fn handle_checks_in_order() {
        let db = db_with("@taken");
        assert_eq!(
            validate_new_handle(&db, "@taken"),
            Err(CommandError::DuplicateHandle("@taken".into()))
        );
        assert_eq!(validate_new_handle(&db, "@"), Err(CommandError::EmptyHandle));
        // Narrow emptiness check: any single character trips it first
        assert_eq!(validate_new_handle(&db, "x"), Err(CommandError::EmptyHandle));
        assert_eq!(
            validate_new_handle(&db, "alice"),
            Err(CommandError::HandleMissingAt)
        );
        assert_eq!(
            validate_new_handle(&db, &format!("@{}", "a".repeat(31))),
            Err(CommandError::HandleTooLong)
        );
        assert_eq!(
            validate_new_handle(&db, "@a,b"),
            Err(CommandError::HandleInvalidChars)
        );
        assert_eq!(
            validate_new_handle(&db, "@a\tb"),
            Err(CommandError::HandleInvalidChars)
        );
        assert_eq!(
            validate_new_handle(&db, "@a\x0bb"),
            Err(CommandError::HandleInvalidChars)
        );
        assert_eq!(validate_new_handle(&db, &format!("@{}", "a".repeat(30))), Ok(()));
    }

    #[test]
    fn non_ascii_spaces_are_allowed_in_handles() {
        let db = Database::new();
        assert_eq!(validate_new_handle(&db, "@a\u{a0}b"), Ok(()));
    }

    #[test]
    fn comment_is_stripped_of_newline() {
        assert_eq!(validate_comment("hello world\n"), Ok("hello world"));
        assert_eq!(validate_comment("no newline"), Ok("no newline"));
    }

    #[test]
    fn empty_or_space_leading_comment_rejected() {
        assert_eq!(validate_comment("\n"), Err(CommandError::EmptyComment));
        assert_eq!(validate_comment(""), Err(CommandError::EmptyComment));
        assert_eq!(validate_comment(" hi\n"), Err(CommandError::EmptyComment));
    }

    #[test]
    fn comment_character_rules() {
        assert_eq!(validate_comment("a,b\n"), Err(CommandError::CommentHasComma));
        assert_eq!(
            validate_comment("tab\there\n"),
            Err(CommandError::CommentInvalidChars)
        );
        assert_eq!(
            validate_comment("caf\u{e9}\n"),
            Err(CommandError::CommentInvalidChars)
        );
        assert_eq!(
            validate_comment("crlf\r\n"),
            Err(CommandError::CommentInvalidChars)
        );
    }

    #[test]
    fn overlong_comment_line_is_cut_at_buffer() {
        let line = format!("{},tail\n", "a".repeat(300));
        // The comma lies past the buffer and is never seen
        let comment = validate_comment(&line).unwrap();
        assert_eq!(comment.len(), COMMENT_BUFFER - 1);
    }

    #[test]
    fn unreadable_comment() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert_eq!(
            read_validated_comment(&mut prompt),
            Err(CommandError::CommentUnreadable)
        );
        assert_eq!(prompt.shown(), [COMMENT_PROMPT.to_string()]);
    }
}
