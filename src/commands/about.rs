use crate::command::Command;
use crate::content;
use crate::output::OutputBlock;

/// Profile card plus the core skill matrix; the card's bio and timeline are
/// rendered by the presentation layer, the grid data comes from here.
pub struct AboutCommand;

impl Command for AboutCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        vec![
            OutputBlock::Profile,
            OutputBlock::Skills {
                entries: content::core_skills(),
            },
        ]
    }
}
