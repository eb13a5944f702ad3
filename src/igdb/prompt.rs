use std::collections::VecDeque;
use std::io;

/// Source of interactive input lines.
///
/// The interpreter needs a follow-up line for comment entry in the middle of a
/// command, so input is pulled through this trait rather than passed in up
/// front.
pub trait Prompt {
    /// Shows `prompt` and reads one line, newline included when present.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Replays a fixed list of lines, recording every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.shown.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
