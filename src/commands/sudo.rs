use crate::command::Command;
use crate::output::OutputBlock;

/// Decorative; there is no privilege model to escalate in.
pub struct SudoCommand;

impl Command for SudoCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        vec![OutputBlock::error(
            "Permission denied: access restricted to @gurukrishnaa",
        )]
    }
}
