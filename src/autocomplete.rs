use crate::command::COMMAND_NAMES;

/// Matches against the vocabulary for a `/`-prefixed input buffer, with a
/// selection cursor clamped to the match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    matches: Vec<&'static str>,
    cursor: usize,
}

impl Suggestions {
    /// None unless the buffer starts with `/` and something matches the
    /// remainder (case-insensitive substring).
    pub fn for_input(buffer: &str) -> Option<Suggestions> {
        let term = buffer.strip_prefix('/')?.to_lowercase();
        let matches: Vec<&'static str> = COMMAND_NAMES
            .iter()
            .copied()
            .filter(|name| name.contains(&term))
            .collect();
        if matches.is_empty() {
            None
        } else {
            Some(Suggestions { matches, cursor: 0 })
        }
    }

    pub fn matches(&self) -> &[&'static str] {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.matches.len() - 1);
    }

    /// The keyword that would replace the input buffer. Never submits.
    pub fn selected(&self) -> &'static str {
        self.matches[self.cursor]
    }
}
