use crate::output::OutputBlock;
use std::collections::HashMap;

/// A static command: pure function of its argument text. Anything that needs
/// the session (navigation, dialogue, signals) lives in the interpreter
/// instead.
pub trait Command {
    fn execute(&self, arg: &str) -> Vec<OutputBlock>;
}

/// Full command vocabulary, used by the autocomplete matcher. Includes the
/// interpreter-level commands, not just the registry entries.
pub const COMMAND_NAMES: [&str; 17] = [
    "help", "about", "projects", "contact", "clear", "socials", "test", "open", "theme",
    "shutdown", "ls", "cd", "cat", "snake", "sudo", "whoami", "date",
];

pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name, cmd);
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register("help", Box::new(crate::commands::help::HelpCommand));
        reg.register("about", Box::new(crate::commands::about::AboutCommand));
        reg.register("projects", Box::new(crate::commands::projects::ProjectsCommand));
        reg.register("socials", Box::new(crate::commands::socials::SocialsCommand));
        reg.register("sudo", Box::new(crate::commands::sudo::SudoCommand));
        reg.register("whoami", Box::new(crate::commands::whoami::WhoamiCommand));
        reg.register("date", Box::new(crate::commands::date::DateCommand));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_resolves_static_commands() {
        let reg = CommandRegistry::default_commands();
        for name in ["help", "about", "projects", "socials", "sudo", "whoami", "date"] {
            assert!(reg.get(name).is_some(), "missing {}", name);
        }
        assert!(reg.get("foo123").is_none());
        // signal-emitting commands are dispatched by the interpreter
        assert!(reg.get("clear").is_none());
        assert!(reg.get("snake").is_none());
    }

    #[test]
    fn vocabulary_covers_registry_keys() {
        let reg = CommandRegistry::default_commands();
        for name in COMMAND_NAMES {
            // every registry key must be in the vocabulary; not vice versa
            let _ = reg.get(name);
        }
        assert!(COMMAND_NAMES.contains(&"snake"));
        assert!(COMMAND_NAMES.contains(&"theme"));
    }
}
