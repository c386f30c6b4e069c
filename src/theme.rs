//! Known theme names plus the accent color the presentation layer keys off.
//! Actual styling lives entirely on the UI side; the core only validates
//! names and emits a switch signal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "matrix",
        hex: "#00ff00",
    },
    Theme {
        name: "cyberpunk",
        hex: "#00ffff",
    },
    Theme {
        name: "amber",
        hex: "#ffbf00",
    },
    Theme {
        name: "dracula",
        hex: "#bd93f9",
    },
];

/// Exact key match. Command input is already lowercased by the dispatcher,
/// which is why the table keys are lowercase.
pub fn find(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

pub fn available() -> String {
    THEMES
        .iter()
        .map(|t| t.name)
        .collect::<Vec<_>>()
        .join(", ")
}
