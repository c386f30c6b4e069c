use crate::command::Command;
use crate::output::OutputBlock;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        vec![OutputBlock::text("visitor@portfolio")]
    }
}
