use crate::command::Command;
use crate::content::PROJECTS;
use crate::output::OutputBlock;

pub struct ProjectsCommand;

impl Command for ProjectsCommand {
    fn execute(&self, _arg: &str) -> Vec<OutputBlock> {
        let mut out = vec![OutputBlock::text("Check out some of my recent work:")];
        out.extend(
            PROJECTS
                .iter()
                .map(|p| OutputBlock::link(p.url, format!("{}. {}", p.id, p.label))),
        );
        out.push(OutputBlock::text(
            "Type `open <number>` or click the links above (mouse support enabled).",
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_link_per_project() {
        let out = ProjectsCommand.execute("");
        assert_eq!(out.len(), PROJECTS.len() + 2);
        match &out[4] {
            OutputBlock::Link { label, href } => {
                assert_eq!(label, "4. CLI Portfolio (This website!)");
                assert!(href.starts_with("https://github.com/"));
            }
            other => panic!("expected link, got {:?}", other),
        }
    }
}
