use crate::command::Command;
use crate::output::OutputBlock;
use chrono::Local;

pub struct DateCommand;

impl Command for DateCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        vec![OutputBlock::text(
            Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_a_single_nonempty_line() {
        let out = DateCommand.execute("");
        assert_eq!(out.len(), 1);
        match &out[0] {
            OutputBlock::Text { content } => assert!(!content.is_empty()),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
