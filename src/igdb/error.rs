use std::path::PathBuf;
use thiserror::Error;

/// A rejected command. The interpreter reports these and keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command missing.")]
    MissingCommand,

    #[error("Unrecognized command.")]
    Unrecognized(String),

    #[error("'{0}' command does not take any arguments.")]
    UnexpectedArguments(&'static str),

    #[error("usage: {0} HANDLE FOLLOWERS.")]
    Usage(&'static str),

    #[error("follower count cannot be negative.")]
    NegativeFollowers,

    #[error("follower count must be an integer.")]
    FollowersNotInteger,

    #[error("Extra characters after number: \"{0}\"")]
    FollowersTrailing(String),

    #[error("Follower count is too large.")]
    FollowersTooLarge,

    #[error("Handle '{0}' already exists.")]
    DuplicateHandle(String),

    #[error("Handle cannot be empty.")]
    EmptyHandle,

    #[error("handle must start with '@'.")]
    HandleMissingAt,

    #[error("handle is too long.")]
    HandleTooLong,

    #[error("handle cannot contain commas or whitespace.")]
    HandleInvalidChars,

    #[error("no entry with handle {0}")]
    HandleNotFound(String),

    #[error("Error reading comment.")]
    CommentUnreadable,

    #[error("Comment cannot be empty.")]
    EmptyComment,

    #[error("Comment cannot contain commas.")]
    CommentHasComma,

    #[error("Comment contains invalid characters.")]
    CommentInvalidChars,

    #[error("You did not save your changes. Use 'exit fr' to force exiting anyway.")]
    UnsavedChanges,
}

#[derive(Error, Debug)]
pub enum IgdbError {
    #[error("{0}")]
    Invalid(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to create fallback file '{}': {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IgdbError {
    /// Whether the process must stop. Rejected commands never are.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, IgdbError::Invalid(_))
    }
}

pub type Result<T> = std::result::Result<T, IgdbError>;
