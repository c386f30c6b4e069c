use crate::command::Command;
use crate::output::OutputBlock;

pub struct HelpCommand;

const HELP_LINES: [&str; 11] = [
    "Available commands:",
    "  about        - Learn more about me",
    "  projects     - View my works",
    "  socials      - Connect with me",
    "  contact      - Send me an email",
    "  ls           - List directory contents",
    "  cd <dir>     - Change directory",
    "  cat <file>   - Read file content",
    "  theme <name> - Change theme (matrix, cyberpunk, amber, dracula)",
    "  shutdown     - Turn off the system",
    "  clear        - Clear the terminal",
];

impl Command for HelpCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        HELP_LINES.iter().copied().map(OutputBlock::text).collect()
    }
}
