use std::fmt;

pub const HANDLE_CAPACITY: usize = 32;
pub const COMMENT_CAPACITY: usize = 64;

pub type Handle = BoundedText<HANDLE_CAPACITY>;
pub type Comment = BoundedText<COMMENT_CAPACITY>;

/// Outcome of writing text into a [`BoundedText`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Fits,
    Truncated,
}

impl Assignment {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Assignment::Truncated)
    }
}

/// Text field with a fixed capacity, one slot of which is reserved, so at most
/// `CAP - 1` bytes are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedText<const CAP: usize> {
    text: String,
}

impl<const CAP: usize> BoundedText<CAP> {
    pub const CAPACITY: usize = CAP;
    pub const MAX_LEN: usize = CAP - 1;

    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Builds a field from `text`, truncating when it does not fit.
    pub fn from_text(text: &str) -> (Self, Assignment) {
        let mut field = Self::new();
        let assignment = field.assign(text);
        (field, assignment)
    }

    /// Replaces the contents. Input of `CAP` bytes or more is cut to the last
    /// character boundary at or below `CAP - 1` bytes.
    pub fn assign(&mut self, text: &str) -> Assignment {
        if text.len() < CAP {
            self.text = text.to_string();
            return Assignment::Fits;
        }

        let mut cut = Self::MAX_LEN;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        self.text = text[..cut].to_string();
        Assignment::Truncated
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const CAP: usize> fmt::Display for BoundedText<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/precision flags apply to the text.
        fmt::Display::fmt(self.text.as_str(), f)
    }
}

impl<const CAP: usize> AsRef<str> for BoundedText<CAP> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl<const CAP: usize> PartialEq<str> for BoundedText<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl<const CAP: usize> PartialEq<&str> for BoundedText<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// One tracked account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub handle: Handle,
    pub comment: Comment,
    pub follower_count: u64,
    /// Unix timestamp in seconds.
    pub date_last_modified: u64,
}

impl Record {
    pub fn new(handle: &str, follower_count: u64, comment: &str, date_last_modified: u64) -> Self {
        let (handle, _) = Handle::from_text(handle);
        let (comment, _) = Comment::from_text(comment);
        Self {
            handle,
            comment,
            follower_count,
            date_last_modified,
        }
    }
}
