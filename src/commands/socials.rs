use crate::command::Command;
use crate::output::OutputBlock;

pub struct SocialsCommand;

impl Command for SocialsCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        vec![
            OutputBlock::link("https://github.com/Gurukrishnaa", "GitHub"),
            OutputBlock::link("https://www.linkedin.com/in/guru-krishnaa", "LinkedIn"),
            OutputBlock::link("https://x.com/Batman_674", "X (Twitter)"),
            OutputBlock::text("Type `contact` for email."),
        ]
    }
}
