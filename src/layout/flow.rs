//! Flowchart construction: turns the hierarchy into sized, ordered nodes and
//! edges on a directed-graph backbone, then hands the graph to the layered
//! placer for coordinates.

use crate::model::HierarchyNode;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::layered;

/// Sentinel id of the synthetic root node representing the repository.
pub const ROOT_ID: &str = "__repo_root__";

pub(crate) const BASE_WIDTH: f64 = 220.0;
pub(crate) const BASE_HEIGHT: f64 = 60.0;
const MAX_WIDTH: f64 = 300.0;

/// File children beyond this count trigger compaction.
const COMPACT_THRESHOLD: usize = 8;
/// Inline file names a compacted node can absorb.
const COMPACT_CAPACITY: usize = 12;

/// Layout direction of the rendered flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    /// Root at the top, children flowing downward.
    #[default]
    #[serde(rename = "tb")]
    TopToBottom,
    /// Root at the left, children flowing rightward.
    #[serde(rename = "lr")]
    LeftToRight,
}

impl Direction {
    /// Separation between consecutive rank bands.
    pub(crate) fn rank_sep(self) -> f64 {
        match self {
            Direction::TopToBottom => 120.0,
            Direction::LeftToRight => 80.0,
        }
    }

    fn position_multiplier(self) -> i64 {
        match self {
            Direction::TopToBottom => 2,
            Direction::LeftToRight => 1,
        }
    }

    fn folder_multiplier(self) -> i64 {
        match self {
            Direction::TopToBottom => 3,
            Direction::LeftToRight => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::TopToBottom => "top-to-bottom",
            Direction::LeftToRight => "left-to-right",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tb" | "top-to-bottom" => Ok(Direction::TopToBottom),
            "lr" | "left-to-right" => Ok(Direction::LeftToRight),
            other => Err(format!(
                "unknown layout direction {other:?} (expected top-to-bottom or left-to-right)"
            )),
        }
    }
}

/// A positioned flowchart node. `x`/`y` are the top-left corner.
#[derive(Debug, Clone, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: usize,
    pub is_folder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compacted: Option<CompactedFiles>,
    #[serde(skip)]
    pub(crate) order_hint: i64,
}

impl FlowNode {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// File names absorbed into a compacted directory node.
#[derive(Debug, Clone, Serialize)]
pub struct CompactedFiles {
    /// Up to twelve names, in original child order.
    pub names: Vec<String>,
    /// File children beyond the inline capacity.
    pub hidden: usize,
}

impl CompactedFiles {
    /// Overflow affordance text, present only when files were hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more files", self.hidden))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Positioned flowchart of a repository tree.
///
/// The graph is a tree: a single synthetic root, every other node with
/// exactly one inbound edge, no cross-links.
pub struct Flowchart {
    graph: DiGraph<FlowNode, ()>,
    indices: HashMap<String, NodeIndex>,
    root: NodeIndex,
    direction: Direction,
}

impl Flowchart {
    /// Build and position the flowchart for a hierarchy. The whole node/edge
    /// set is rebuilt from scratch on every call; there is no incremental
    /// relayout.
    pub fn build(roots: &[HierarchyNode], repo_label: &str, direction: Direction) -> Self {
        let mut builder = FlowBuilder {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            direction,
        };

        let root = builder.push(
            FlowNode {
                id: ROOT_ID.to_string(),
                label: repo_label.to_string(),
                x: 0.0,
                y: 0.0,
                width: BASE_WIDTH,
                height: BASE_HEIGHT,
                depth: 0,
                is_folder: true,
                compacted: None,
                order_hint: 0,
            },
            None,
        );
        builder.visit_level(roots, root, 0);

        let mut chart = Self {
            graph: builder.graph,
            indices: builder.indices,
            root,
            direction,
        };
        layered::assign(&mut chart.graph, chart.root, direction);
        chart
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn root(&self) -> &FlowNode {
        &self.graph[self.root]
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.indices.get(id).map(|idx| &self.graph[*idx])
    }

    /// Nodes in creation order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// One edge per parent-child relation, in creation order.
    pub fn edges(&self) -> Vec<FlowEdge> {
        self.graph
            .edge_references()
            .map(|edge| {
                let source = &self.graph[edge.source()].id;
                let target = &self.graph[edge.target()].id;
                FlowEdge {
                    id: format!("{source}-{target}"),
                    source: source.clone(),
                    target: target.clone(),
                }
            })
            .collect()
    }

    pub fn graph(&self) -> &DiGraph<FlowNode, ()> {
        &self.graph
    }
}

/// Explicit accumulator threaded through the traversal, instead of closures
/// over shared mutable collections.
struct FlowBuilder {
    graph: DiGraph<FlowNode, ()>,
    indices: HashMap<String, NodeIndex>,
    direction: Direction,
}

impl FlowBuilder {
    /// Visit one sibling group: files first, then folders, each with its own
    /// zig-zag position sequence.
    fn visit_level(&mut self, children: &[HierarchyNode], parent: NodeIndex, depth: usize) {
        let (files, folders): (Vec<&HierarchyNode>, Vec<&HierarchyNode>) =
            children.iter().partition(|c| !c.is_folder());

        for (i, file) in files.iter().enumerate() {
            self.visit(file, parent, depth, zigzag(i));
        }
        for (i, folder) in folders.iter().enumerate() {
            self.visit(folder, parent, depth, folder_offset(i, files.len()));
        }
    }

    fn visit(&mut self, node: &HierarchyNode, parent: NodeIndex, depth: usize, position: i64) {
        let compacted = compaction(node);
        let is_folder = node.is_folder();
        let label = node.name().to_string();
        let hint = position
            * self.direction.position_multiplier()
            * if is_folder {
                self.direction.folder_multiplier()
            } else {
                1
            };

        let idx = self.push(
            FlowNode {
                id: node.path.clone(),
                width: node_width(&label, compacted.is_some()),
                height: node_height(node.children.len(), compacted.is_some()),
                label,
                x: 0.0,
                y: 0.0,
                depth,
                is_folder,
                compacted,
                order_hint: hint,
            },
            Some(parent),
        );

        if !is_folder {
            return;
        }
        if self.graph[idx].compacted.is_some() {
            // Absorbed files get no nodes of their own; subdirectories are
            // still recursed normally.
            let folders: Vec<&HierarchyNode> = node.folder_children().collect();
            for (i, folder) in folders.iter().enumerate() {
                self.visit(folder, idx, depth + 1, folder_offset(i, 0));
            }
        } else {
            self.visit_level(&node.children, idx, depth + 1);
        }
    }

    fn push(&mut self, node: FlowNode, parent: Option<NodeIndex>) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.indices.insert(id, idx);
        if let Some(parent) = parent {
            self.graph.add_edge(parent, idx, ());
        }
        idx
    }
}

/// The i-th item of a group alternates right and left of the parent's axis:
/// +1, -1, +2, -2, ...
fn zigzag(i: usize) -> i64 {
    let step = (i / 2) as i64;
    if i % 2 == 0 { step + 1 } else { -step - 1 }
}

/// Folder indices start past the file group's span so the two groups do not
/// collide.
fn folder_offset(i: usize, file_count: usize) -> i64 {
    let base = (file_count / 2) as i64;
    let step = (i / 2) as i64;
    if i % 2 == 0 {
        base + step + 1
    } else {
        -base - step - 1
    }
}

/// Width scales with the label, clamped to [`BASE_WIDTH`, 300]; compacted
/// nodes take a fixed wider body for the inline file list.
fn node_width(label: &str, compacted: bool) -> f64 {
    if compacted {
        return BASE_WIDTH * 1.5;
    }
    (label.chars().count() as f64 * 8.0 + 40.0).clamp(BASE_WIDTH, MAX_WIDTH)
}

/// Compacted nodes grow to fit the two-column inline list.
fn node_height(child_count: usize, compacted: bool) -> f64 {
    if !compacted {
        return BASE_HEIGHT;
    }
    let rows = child_count.min(COMPACT_CAPACITY).div_ceil(2);
    BASE_HEIGHT + rows as f64 * 24.0 + 24.0
}

/// A directory with more than eight direct file children is rendered as a
/// single node absorbing up to twelve file names inline.
fn compaction(node: &HierarchyNode) -> Option<CompactedFiles> {
    if !node.is_folder() {
        return None;
    }
    let files: Vec<&HierarchyNode> = node.file_children().collect();
    if files.len() <= COMPACT_THRESHOLD {
        return None;
    }
    Some(CompactedFiles {
        names: files
            .iter()
            .take(COMPACT_CAPACITY)
            .map(|f| f.name().to_string())
            .collect(),
        hidden: files.len().saturating_sub(COMPACT_CAPACITY),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use petgraph::Direction::Incoming;

    fn file(path: &str) -> HierarchyNode {
        HierarchyNode {
            path: path.to_string(),
            kind: EntryKind::Blob,
            sha: None,
            children: Vec::new(),
        }
    }

    fn dir(path: &str, children: Vec<HierarchyNode>) -> HierarchyNode {
        HierarchyNode {
            path: path.to_string(),
            kind: EntryKind::Tree,
            sha: None,
            children,
        }
    }

    fn dir_with_files(path: &str, count: usize) -> HierarchyNode {
        let children = (0..count)
            .map(|i| file(&format!("{path}/f{i}.txt")))
            .collect();
        dir(path, children)
    }

    #[test]
    fn zigzag_alternates_around_the_axis() {
        let positions: Vec<i64> = (0..5).map(zigzag).collect();
        assert_eq!(positions, [1, -1, 2, -2, 3]);
    }

    #[test]
    fn folder_positions_clear_the_file_span() {
        // Five files occupy indices -3..=3; folders start at +-(5/2 + 1).
        assert_eq!(folder_offset(0, 5), 3);
        assert_eq!(folder_offset(1, 5), -3);
        assert_eq!(folder_offset(2, 5), 4);
    }

    #[test]
    fn synthetic_root_always_present() {
        let chart = Flowchart::build(&[], "owner/repo", Direction::TopToBottom);
        assert_eq!(chart.node_count(), 1);
        assert_eq!(chart.root().id, ROOT_ID);
        assert_eq!(chart.root().label, "owner/repo");
    }

    #[test]
    fn eight_files_stay_expanded() {
        let roots = vec![dir_with_files("assets", 8)];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let node = chart.node("assets").unwrap();
        assert!(node.compacted.is_none());
        // root + dir + 8 files
        assert_eq!(chart.node_count(), 10);
    }

    #[test]
    fn nine_files_compact_without_overflow() {
        let roots = vec![dir_with_files("assets", 9)];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let node = chart.node("assets").unwrap();
        let compacted = node.compacted.as_ref().unwrap();
        assert_eq!(compacted.names.len(), 9);
        assert_eq!(compacted.hidden, 0);
        assert_eq!(compacted.overflow_label(), None);
        // Absorbed files produce no nodes.
        assert_eq!(chart.node_count(), 2);
        assert!(chart.node("assets/f0.txt").is_none());
    }

    #[test]
    fn fifteen_files_show_twelve_plus_overflow() {
        let roots = vec![dir_with_files("assets", 15)];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let compacted = chart.node("assets").unwrap().compacted.as_ref().unwrap();
        assert_eq!(compacted.names.len(), 12);
        assert_eq!(compacted.hidden, 3);
        assert_eq!(compacted.overflow_label().as_deref(), Some("+3 more files"));
    }

    #[test]
    fn inline_names_keep_original_child_order() {
        let children = vec![
            file("d/zeta.txt"),
            file("d/alpha.txt"),
            file("d/mid.txt"),
            file("d/b1.txt"),
            file("d/b2.txt"),
            file("d/b3.txt"),
            file("d/b4.txt"),
            file("d/b5.txt"),
            file("d/b6.txt"),
        ];
        let chart = Flowchart::build(&[dir("d", children)], "r", Direction::TopToBottom);

        let compacted = chart.node("d").unwrap().compacted.as_ref().unwrap();
        assert_eq!(compacted.names[0], "zeta.txt");
        assert_eq!(compacted.names[1], "alpha.txt");
    }

    #[test]
    fn subdirectories_of_a_compacted_directory_are_still_recursed() {
        let mut children: Vec<HierarchyNode> =
            (0..10).map(|i| file(&format!("d/f{i}.txt"))).collect();
        children.push(dir("d/sub", vec![file("d/sub/inner.txt")]));

        let chart = Flowchart::build(&[dir("d", children)], "r", Direction::TopToBottom);

        assert!(chart.node("d").unwrap().compacted.is_some());
        assert!(chart.node("d/sub").is_some());
        assert!(chart.node("d/sub/inner.txt").is_some());
        assert!(chart.node("d/f0.txt").is_none());
    }

    #[test]
    fn subdirectories_do_not_count_toward_the_threshold() {
        let mut children: Vec<HierarchyNode> = (0..8)
            .map(|i| file(&format!("d/f{i}.txt")))
            .collect();
        children.push(dir("d/s1", vec![]));
        children.push(dir("d/s2", vec![]));

        let chart = Flowchart::build(&[dir("d", children)], "r", Direction::TopToBottom);
        assert!(chart.node("d").unwrap().compacted.is_none());
    }

    #[test]
    fn width_tracks_label_length_within_clamp() {
        assert_eq!(node_width("a", false), BASE_WIDTH);
        // 30 chars * 8 + 40 = 280
        assert_eq!(node_width(&"x".repeat(30), false), 280.0);
        assert_eq!(node_width(&"x".repeat(80), false), 300.0);
        assert_eq!(node_width("anything", true), 330.0);
    }

    #[test]
    fn compacted_height_fits_the_inline_rows() {
        assert_eq!(node_height(4, false), BASE_HEIGHT);
        // ceil(9/2) = 5 rows
        assert_eq!(node_height(9, true), BASE_HEIGHT + 5.0 * 24.0 + 24.0);
        // capped at twelve entries -> 6 rows
        assert_eq!(node_height(40, true), BASE_HEIGHT + 6.0 * 24.0 + 24.0);
    }

    #[test]
    fn graph_is_a_tree() {
        let roots = vec![
            dir(
                "src",
                vec![file("src/main.rs"), dir("src/util", vec![file("src/util/io.rs")])],
            ),
            file("README.md"),
        ];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);
        let graph = chart.graph();

        for idx in graph.node_indices() {
            let inbound = graph.neighbors_directed(idx, Incoming).count();
            if graph[idx].id == ROOT_ID {
                assert_eq!(inbound, 0);
            } else {
                assert_eq!(inbound, 1, "node {} has {} parents", graph[idx].id, inbound);
            }
        }
        assert_eq!(chart.edges().len(), chart.node_count() - 1);
    }

    #[test]
    fn edges_connect_parents_to_children() {
        let roots = vec![dir("src", vec![file("src/main.rs")])];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let edges = chart.edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source, ROOT_ID);
        assert_eq!(edges[0].target, "src");
        assert_eq!(edges[1].source, "src");
        assert_eq!(edges[1].target, "src/main.rs");
        assert_eq!(edges[1].id, "src-src/main.rs");
    }
}
