//! The versioned data asset: portfolio file tree, project table, profile
//! skill matrix. All read-only configuration, no behavior.

use crate::output::SkillEntry;
use crate::vfs::VfsNode;
use once_cell::sync::Lazy;

pub const CONTACT_EMAIL: &str = "gurukrishnaa.k@gmail.com";

pub const RICKROLL_IMAGE: &str = "/rick-roll-h2d7puir23see4lq-1667563362.gif";

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: i64,
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        label: "AUTOPOD: Intelligent Container",
        url: "https://github.com/Ajay73588/AUTOPOD_INTELLIGENT_CONTAINER",
    },
    Project {
        id: 2,
        label: "Pulmo-track: Lung Health Monitoring",
        url: "https://github.com/DINESHLINGAM-6/Pulmo-track",
    },
    Project {
        id: 3,
        label: "AI-Chef: Intelligent Recipe Generator",
        url: "https://github.com/Gurukrishnaa/AI-Chef",
    },
    Project {
        id: 4,
        label: "CLI Portfolio (This website!)",
        url: "https://github.com/Gurukrishnaa/cli-portfolio",
    },
];

pub fn find_project(id: i64) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// The 8-entry core skill matrix shown next to the profile card.
pub fn core_skills() -> Vec<SkillEntry> {
    [
        ("TS", "typescript"),
        ("Py", "python"),
        ("Go", "go"),
        ("C++", "cplusplus"),
        ("Node", "nodedotjs"),
        ("SQL", "postgresql"),
        ("Dock", "docker"),
        ("Linux", "linux"),
    ]
    .iter()
    .map(|(name, icon)| SkillEntry::new(name, icon))
    .collect()
}

const ABOUT_TXT: &str = "\
I am a Computer Science undergraduate at SRM Institute of Science and Technology
with a strong focus on backend engineering, data systems, and applied AI.
I care about building systems that are correct, explainable, and scalable under
real constraints rather than just producing demos.

I enjoy working close to data, APIs, and infrastructure, and I prefer designs
that are simple to reason about and easy to evolve.
This portfolio is built as a CLI to reflect how I naturally explore and explain systems.

Skills
------
Languages:
- TypeScript
- Python
- Go
- JavaScript
- Java
- SQL
- C / C++

Backend & Systems:
- Node.js, Express.js
- REST API
- Authentication & secure file handling
- PostgreSQL, MongoDB, MySQL
- Linux fundamentals

Frontend (supporting, not primary):
- React.js
- Tailwind CSS
- Next.js
- HTML / CSS / JavaScript

Tools:
- Git
- Docker
- Podman
- VS Code
- Firebase

Experience
----------
Full Stack Developer Intern — Infinitraq
- Worked across both frontend and backend layers of the product
- Implemented feature changes and bug fixes in React-based interfaces
- Developed and modified backend APIs using Node.js and Express.js
- Collaborated with existing codebases, adapting to established architecture and patterns
- Focused on improving reliability, data flow, and user-facing behavior without breaking existing functionality

Technical Team Member — ACM Student Chapter, SRMIST
- Collaborating on technical initiatives to promote practical computing skills
- Supporting workshops and peer learning focused on real-world development";

const README_MD: &str = "\
# PortOS v1.0 (Beta)

Welcome to my digital playground. This is a fully interactive terminal portfolio.
It runs on Next.js but dreams of being a Linux distro.

## Features you might miss:
- **Snake Game**: Type `snake` to slack off.
- **Themes**: Type `theme <tab>` to switch aesthetics (Matrix, Cyberpunk, etc).
- **Secrets**: Try `whoami`, `date`, or `sudo`.
- **Real Email**: Type `contact` to send me a message directly from here.

## WARNINGS (Read Carefully):
- `rm -rf /` will NOT actually delete your hard drive, but it might hurt the terminal's feelings.
- `test` is purely for simulation. No real hacking involved (sadly).
- If you see a glitch, it's a feature. If you see two glitches, it's a Matrix sequel.
- `sudo` has no power here. You have no power here!

Made with love, code, and too much caffeine by Guru Krishnaa.";

/// The whole portfolio tree, rooted at `~`. Built once, process-wide.
pub static FILE_SYSTEM: Lazy<VfsNode> = Lazy::new(|| {
    VfsNode::dir(vec![
        ("about.txt", VfsNode::file(ABOUT_TXT)),
        (
            "portfolio.txt",
            VfsNode::file(
                "This is my interactive CLI Portfolio!\n\nNavigate to the `projects` directory to see my work:\n  cd projects\n  ls\n\nOr type `about` to learn more about me.",
            ),
        ),
        (
            "contact.txt",
            VfsNode::file(
                "Email: gurukrishnaa.k@gmail.com\nGitHub: github.com/Gurukrishnaa\nLinkedIn: linkedin.com/in/guru-krishnaa\nX: x.com/Batman_674",
            ),
        ),
        (
            "projects",
            VfsNode::dir(vec![
                (
                    "autopod.txt",
                    VfsNode::file(
                        "Project: AUTOPOD_INTELLIGENT_CONTAINER\nDescription: Autonomous container system or deployment tool.\nLink: https://github.com/Ajay73588/AUTOPOD_INTELLIGENT_CONTAINER\n\nRun `open 1` to view.",
                    ),
                ),
                (
                    "pulmo-track.txt",
                    VfsNode::file(
                        "Project: Pulmo-track\nDescription: Lung health monitoring system.\nLink: https://github.com/DINESHLINGAM-6/Pulmo-track\n\nRun `open 2` to view.",
                    ),
                ),
                (
                    "ai-chef.txt",
                    VfsNode::file(
                        "Project: AI-Chef\nDescription: Intelligent recipe generator using AI.\nLink: https://github.com/Gurukrishnaa/AI-Chef\n\nRun `open 3` to view.",
                    ),
                ),
                (
                    "portfolio.txt",
                    VfsNode::file(
                        "Project: CLI Portfolio\nStack: Next.js, React, TailwindCSS\nDescription: The interactive terminal you are using right now.\n\nRun `open 4` to view source.",
                    ),
                ),
            ]),
        ),
        (
            "skills",
            VfsNode::dir(vec![
                (
                    "languages.txt",
                    VfsNode::file("- TypeScript\n- Python\n- Go\n- JavaScript\n- Java\n- SQL\n- C / C++"),
                ),
                (
                    "backend.txt",
                    VfsNode::file(
                        "- Node.js, Express.js\n- REST API\n- Authentication\n- PostgreSQL, MongoDB, MySQL\n- Linux fundamentals",
                    ),
                ),
                (
                    "frontend.txt",
                    VfsNode::file("- React.js\n- Tailwind CSS\n- Next.js\n- HTML / CSS / JS"),
                ),
                (
                    "tools.txt",
                    VfsNode::file("- Git\n- Docker\n- Podman\n- VS Code\n- Firebase"),
                ),
            ]),
        ),
        ("README.md", VfsNode::file(README_MD)),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::resolve_directory;

    #[test]
    fn tree_has_expected_root_entries() {
        let root = &*FILE_SYSTEM;
        let children = root.children().unwrap();
        assert_eq!(children.len(), 6);
        assert!(children["projects"].is_dir());
        assert!(children["skills"].is_dir());
        assert!(!children["README.md"].is_dir());
    }

    #[test]
    fn every_directory_path_resolves() {
        for segments in [
            vec!["~".to_string()],
            vec!["~".to_string(), "projects".to_string()],
            vec!["~".to_string(), "skills".to_string()],
        ] {
            assert!(resolve_directory(&FILE_SYSTEM, &segments).is_some());
        }
    }

    #[test]
    fn project_table_lookup() {
        assert_eq!(find_project(4).unwrap().label, "CLI Portfolio (This website!)");
        assert!(find_project(99).is_none());
        assert_eq!(PROJECTS.len(), 4);
    }

    #[test]
    fn skill_matrix_has_eight_entries() {
        assert_eq!(core_skills().len(), 8);
    }
}
