use std::collections::HashMap;

/// Root sentinel; every session path starts with it.
pub const ROOT: &str = "~";

/// Static, read-only file tree the navigation commands walk over.
/// Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub enum VfsNode {
    File {
        content: String,
    },
    Directory {
        children: HashMap<String, VfsNode>,
    },
}

impl VfsNode {
    pub fn file(content: &str) -> Self {
        VfsNode::File {
            content: content.to_string(),
        }
    }

    pub fn dir(entries: Vec<(&str, VfsNode)>) -> Self {
        VfsNode::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    pub fn children(&self) -> Option<&HashMap<String, VfsNode>> {
        match self {
            VfsNode::Directory { children } => Some(children),
            VfsNode::File { .. } => None,
        }
    }

    /// Case-insensitive lookup among direct children. Returns the key as it
    /// was stored so `cd`/`ls` can echo the original casing.
    pub fn lookup_child(&self, name: &str) -> Option<(&str, &VfsNode)> {
        let children = self.children()?;
        children
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, node)| (key.as_str(), node))
    }
}

/// Walk the tree from root following each segment after the `~` sentinel.
/// Fails if any segment is missing or resolves to a file.
pub fn resolve_directory<'a>(root: &'a VfsNode, path: &[String]) -> Option<&'a VfsNode> {
    let mut node = root;
    for segment in path.iter().skip(1) {
        let (_, next) = node.lookup_child(segment)?;
        if !next.is_dir() {
            return None;
        }
        node = next;
    }
    if node.is_dir() {
        Some(node)
    } else {
        None
    }
}
