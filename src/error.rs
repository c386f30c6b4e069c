use thiserror::Error;

/// Everything a command can complain about. Display strings are the exact
/// lines shown in the transcript, so callers can wrap any variant in an
/// error output block without further formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{cmd}: {target}: No such file or directory")]
    NoSuchEntry { cmd: &'static str, target: String },

    #[error("cd: {0}: Not a directory")]
    NotADirectory(String),

    #[error("cat: {0}: Is a directory")]
    IsADirectory(String),

    /// The session's current path no longer resolves to a directory.
    #[error("Not a directory")]
    UnresolvedPath,

    #[error("Project {0} not found.")]
    UnknownProject(i64),

    #[error("Theme '{name}' not found. Available: {available}")]
    UnknownTheme { name: String, available: String },

    #[error("Transmission Error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_transcript_wording() {
        assert_eq!(
            ShellError::UnknownCommand("foo123".into()).to_string(),
            "Command not found: foo123. Type 'help' for available commands."
        );
        assert_eq!(
            ShellError::NoSuchEntry {
                cmd: "cd",
                target: "nope".into()
            }
            .to_string(),
            "cd: nope: No such file or directory"
        );
        assert_eq!(
            ShellError::IsADirectory("projects".into()).to_string(),
            "cat: projects: Is a directory"
        );
        assert_eq!(
            ShellError::Usage("cat <filename>").to_string(),
            "Usage: cat <filename>"
        );
    }
}
