use crate::output::OutputBlock;
use crate::vfs::ROOT;
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

/// One rendered transcript record: what was typed, what came out, and the
/// path that was active at submit time. Append-only except for bulk clear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub command: String,
    pub output: Vec<OutputBlock>,
    pub path: String,
}

/// Position inside the guided email-capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    Name,
    Email,
    Subject,
    Message,
}

impl DialogueStep {
    /// 1-based step counter; 0 means idle (command mode).
    pub fn number(self) -> u8 {
        match self {
            DialogueStep::Name => 1,
            DialogueStep::Email => 2,
            DialogueStep::Subject => 3,
            DialogueStep::Message => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailDialogue {
    pub step: DialogueStep,
    pub draft: EmailDraft,
}

/// How the next submitted line is treated. A dialogue only exists while in
/// capture mode, so a stale partial draft cannot outlive it.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionMode {
    Command,
    EmailCapture(EmailDialogue),
}

/// One user's live interaction state. Created at session start, never
/// persisted.
pub struct Session {
    pub path: Vec<String>,
    pub mode: InteractionMode,
    history: Vec<String>,
    recall: Option<usize>,
    transcript: Vec<TranscriptEntry>,
    next_id: EntryId,
}

impl Session {
    pub fn new() -> Self {
        Self {
            path: vec![ROOT.to_string()],
            mode: InteractionMode::Command,
            history: Vec::new(),
            recall: None,
            transcript: Vec::new(),
            next_id: 0,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// 0 when idle, 1..4 while capturing the email draft.
    pub fn dialogue_step(&self) -> u8 {
        match &self.mode {
            InteractionMode::Command => 0,
            InteractionMode::EmailCapture(d) => d.step.number(),
        }
    }

    /// Input-line prompt label for the current mode.
    pub fn prompt(&self) -> &'static str {
        match &self.mode {
            InteractionMode::Command => "›",
            InteractionMode::EmailCapture(d) => match d.step {
                DialogueStep::Name => "Name >",
                DialogueStep::Email => "Email >",
                DialogueStep::Subject => "Subject >",
                DialogueStep::Message => "Message >",
            },
        }
    }

    // -- transcript --

    pub fn append_entry(
        &mut self,
        command: impl Into<String>,
        output: Vec<OutputBlock>,
        path: impl Into<String>,
    ) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.transcript.push(TranscriptEntry {
            id,
            command: command.into(),
            output,
            path: path.into(),
        });
        id
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut TranscriptEntry> {
        self.transcript.iter_mut().find(|e| e.id == id)
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    // -- command history recall --

    /// Record a submitted line. Resets the recall cursor; blank lines are
    /// never recorded.
    pub fn push_history(&mut self, line: &str) {
        self.recall = None;
        if !line.trim().is_empty() {
            self.history.push(line.to_string());
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Step back through history; from idle lands on the newest entry.
    pub fn recall_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.recall {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall = Some(index);
        Some(&self.history[index])
    }

    /// Step forward; walking past the newest entry clears the cursor and
    /// returns None so the caller can empty the input buffer.
    pub fn recall_next(&mut self) -> Option<&str> {
        let i = self.recall?;
        if i + 1 < self.history.len() {
            self.recall = Some(i + 1);
            Some(&self.history[i + 1])
        } else {
            self.recall = None;
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
