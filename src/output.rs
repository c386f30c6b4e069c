use crate::error::ShellError;
use serde::{Deserialize, Serialize};

/// One rendered line/widget of terminal output. The presentation layer
/// matches exhaustively on the variant; the core never renders anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputBlock {
    Text { content: String },
    Link { href: String, label: String },
    Error { content: String },
    Success { content: String },
    Image { src: String },
    Skills { entries: Vec<SkillEntry> },
    Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub icon: String,
}

impl SkillEntry {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl OutputBlock {
    pub fn text(content: impl Into<String>) -> Self {
        OutputBlock::Text {
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        OutputBlock::Error {
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        OutputBlock::Success {
            content: content.into(),
        }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        OutputBlock::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        OutputBlock::Image { src: src.into() }
    }

    /// Render a shell error as a single error block, message taken from Display.
    pub fn from_err(err: ShellError) -> Self {
        OutputBlock::Error {
            content: err.to_string(),
        }
    }
}
