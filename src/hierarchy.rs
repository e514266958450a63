//! Reconstructs the nested directory hierarchy from the backend's flat tree
//! listing.
//!
//! Entries arrive as slash-separated paths in arbitrary order, and
//! intermediate directories may or may not be listed explicitly. The builder
//! runs two passes: one creating a node per distinct sub-path, one attaching
//! each node to its parent. Attachment follows first-creation order, which
//! follows input order, so the output is deterministic for a given listing.

use crate::model::{EntryKind, HierarchyNode, TreeEntry};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// A path contained a zero-length segment (leading, trailing, or doubled
    /// slash), or was empty altogether.
    #[error("invalid tree path {path:?}: empty path segment")]
    EmptySegment { path: String },

    /// A path is listed as a file but also required to be a directory,
    /// either by a second listing or by another entry nesting beneath it.
    #[error("conflicting kinds for tree path {path:?}: listed as both file and directory")]
    KindConflict { path: String },
}

struct PendingNode {
    kind: EntryKind,
    sha: Option<String>,
}

/// Build the root-level hierarchy from a flat entry listing.
///
/// Every entry's full path and all of its ancestor paths become nodes.
/// Duplicate identical entries keep their first occurrence; a path listed
/// with two different kinds is rejected.
pub fn build(entries: &[TreeEntry]) -> Result<Vec<HierarchyNode>, HierarchyError> {
    // First pass: one pending node per distinct sub-path, in discovery order.
    let mut order: Vec<String> = Vec::new();
    let mut pending: HashMap<String, PendingNode> = HashMap::new();

    for entry in entries {
        let segments: Vec<&str> = entry.path.split('/').collect();
        if entry.path.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(HierarchyError::EmptySegment {
                path: entry.path.clone(),
            });
        }

        let mut current = String::with_capacity(entry.path.len());
        for (index, segment) in segments.iter().enumerate() {
            if index > 0 {
                current.push('/');
            }
            current.push_str(segment);

            let is_leaf = index == segments.len() - 1;
            let kind = if is_leaf { entry.kind } else { EntryKind::Tree };

            match pending.get_mut(current.as_str()) {
                None => {
                    order.push(current.clone());
                    pending.insert(
                        current.clone(),
                        PendingNode {
                            kind,
                            sha: if is_leaf { entry.sha.clone() } else { None },
                        },
                    );
                }
                Some(existing) => {
                    // A second sighting may only restate the same kind; a
                    // blob can never double as someone's parent directory.
                    if existing.kind != kind {
                        return Err(HierarchyError::KindConflict { path: current });
                    }
                    if is_leaf && existing.sha.is_none() {
                        existing.sha = entry.sha.clone();
                    }
                }
            }
        }
    }

    // Second pass: group children under parents, still in discovery order.
    let mut roots: Vec<&str> = Vec::new();
    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    for path in &order {
        match path.rfind('/') {
            None => roots.push(path),
            Some(cut) => children_of.entry(&path[..cut]).or_default().push(path),
        }
    }

    Ok(roots
        .iter()
        .map(|root| assemble(root, &pending, &children_of))
        .collect())
}

fn assemble(
    path: &str,
    pending: &HashMap<String, PendingNode>,
    children_of: &HashMap<&str, Vec<&str>>,
) -> HierarchyNode {
    let meta = &pending[path];
    let children = children_of
        .get(path)
        .map(|kids| {
            kids.iter()
                .map(|kid| assemble(kid, pending, children_of))
                .collect()
        })
        .unwrap_or_default();

    HierarchyNode {
        path: path.to_string(),
        kind: meta.kind,
        sha: meta.sha.clone(),
        children,
    }
}

/// Total folder and file counts across the whole hierarchy.
pub fn totals(nodes: &[HierarchyNode]) -> (usize, usize) {
    let mut folders = 0;
    let mut files = 0;
    for node in nodes {
        if node.is_folder() {
            folders += 1;
            let (sub_folders, sub_files) = totals(&node.children);
            folders += sub_folders;
            files += sub_files;
        } else {
            files += 1;
        }
    }
    (folders, files)
}
