use serde::{Deserialize, Serialize};

/// A single flat entry from the backend's recursive tree listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub sha: Option<String>,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
            sha: None,
        }
    }
}

/// Git object kind as reported by the tree listing. Anything other than
/// `blob` or `tree` fails deserialization at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Tree)
    }
}

/// Response of `GET /api/repos/{owner}/{repo}/tree`.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    pub default_branch: String,
    pub tree: Vec<TreeEntry>,
}

/// A directory or file in the reconstructed hierarchy.
///
/// `path` is the full slash-joined path and doubles as the unique key.
/// Child paths extend the parent path by exactly one segment; `Blob` nodes
/// never have children.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyNode {
    pub path: String,
    pub kind: EntryKind,
    pub sha: Option<String>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Last path segment, used as the display name.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Direct children that are files.
    pub fn file_children(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.children.iter().filter(|c| !c.is_folder())
    }

    /// Direct children that are subdirectories.
    pub fn folder_children(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.children.iter().filter(|c| c.is_folder())
    }
}
