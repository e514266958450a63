//! Layered coordinate assignment for the flowchart tree.
//!
//! Ranks come from tree depth. Sibling order comes from the zig-zag order
//! hints computed during construction; ordering a tree's siblings before
//! placement already yields a crossing-free drawing, so no separate
//! crossing-minimization pass is needed. Subtrees are placed side by side
//! with fixed separation, parents centered over their children, and the
//! whole drawing is translated so the synthetic root sits on the midpoint of
//! the bounding box.

use super::flow::{Direction, FlowNode};
use petgraph::Direction::Outgoing;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

const NODE_SEP: f64 = 40.0;
const MARGIN: f64 = 50.0;

pub(crate) fn assign(graph: &mut DiGraph<FlowNode, ()>, root: NodeIndex, direction: Direction) {
    let children = ordered_children(graph);

    // Rank every node by tree depth; each rank band is as tall (TB) or as
    // wide (LR) as its largest member.
    let mut ranks: HashMap<NodeIndex, usize> = HashMap::new();
    let mut bands: Vec<f64> = Vec::new();
    rank(graph, &children, root, 0, direction, &mut ranks, &mut bands);

    // Cross-axis placement: tidy side-by-side subtrees.
    let mut centers: HashMap<NodeIndex, f64> = HashMap::new();
    place(graph, &children, root, MARGIN, direction, &mut centers);

    // Main-axis placement: nodes centered within their rank band.
    let mut band_centers = Vec::with_capacity(bands.len());
    let mut offset = MARGIN;
    for band in &bands {
        band_centers.push(offset + band / 2.0);
        offset += band + direction.rank_sep();
    }

    let positions: Vec<(NodeIndex, f64, f64)> = graph
        .node_indices()
        .map(|idx| {
            let cross = centers[&idx];
            let main = band_centers[ranks[&idx]];
            let (cx, cy) = match direction {
                Direction::TopToBottom => (cross, main),
                Direction::LeftToRight => (main, cross),
            };
            (idx, cx, cy)
        })
        .collect();

    // Translate everything so the root lands on the bounding-box midpoint.
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut root_center = (0.0, 0.0);
    for &(idx, cx, cy) in &positions {
        min_x = min_x.min(cx);
        max_x = max_x.max(cx);
        min_y = min_y.min(cy);
        max_y = max_y.max(cy);
        if idx == root {
            root_center = (cx, cy);
        }
    }
    let dx = (min_x + max_x) / 2.0 - root_center.0;
    let dy = (min_y + max_y) / 2.0 - root_center.1;

    for (idx, cx, cy) in positions {
        let node = &mut graph[idx];
        node.x = cx + dx - node.width / 2.0;
        node.y = cy + dy - node.height / 2.0;
    }
}

/// Children of every node in sibling order: petgraph iterates neighbors
/// newest-edge-first, so the list is reversed back to insertion order, then
/// stably sorted by the zig-zag order hint.
fn ordered_children(graph: &DiGraph<FlowNode, ()>) -> HashMap<NodeIndex, Vec<NodeIndex>> {
    let mut map = HashMap::new();
    for idx in graph.node_indices() {
        let mut kids: Vec<NodeIndex> = graph.neighbors_directed(idx, Outgoing).collect();
        kids.reverse();
        kids.sort_by_key(|kid| graph[*kid].order_hint);
        map.insert(idx, kids);
    }
    map
}

fn rank(
    graph: &DiGraph<FlowNode, ()>,
    children: &HashMap<NodeIndex, Vec<NodeIndex>>,
    node: NodeIndex,
    depth: usize,
    direction: Direction,
    ranks: &mut HashMap<NodeIndex, usize>,
    bands: &mut Vec<f64>,
) {
    ranks.insert(node, depth);
    if bands.len() <= depth {
        bands.push(0.0);
    }
    let size = main_size(&graph[node], direction);
    if size > bands[depth] {
        bands[depth] = size;
    }
    for &child in &children[&node] {
        rank(graph, children, child, depth + 1, direction, ranks, bands);
    }
}

/// Place `node` and its subtree starting at `cursor` along the cross axis;
/// returns the subtree's extent end. Parents center over their children; a
/// parent wider than its children's span pushes the subtree along instead of
/// overlapping a neighbor.
fn place(
    graph: &DiGraph<FlowNode, ()>,
    children: &HashMap<NodeIndex, Vec<NodeIndex>>,
    node: NodeIndex,
    cursor: f64,
    direction: Direction,
    centers: &mut HashMap<NodeIndex, f64>,
) -> f64 {
    let own = cross_size(&graph[node], direction);
    let kids = &children[&node];
    if kids.is_empty() {
        centers.insert(node, cursor + own / 2.0);
        return cursor + own;
    }

    let mut end = cursor;
    for (i, &kid) in kids.iter().enumerate() {
        if i > 0 {
            end += NODE_SEP;
        }
        end = place(graph, children, kid, end, direction, centers);
    }

    let first = centers[&kids[0]];
    let last = centers[&kids[kids.len() - 1]];
    let mut center = (first + last) / 2.0;

    if center - own / 2.0 < cursor {
        let shift = cursor - (center - own / 2.0);
        for &kid in kids {
            shift_subtree(children, kid, shift, centers);
        }
        center += shift;
        end += shift;
    }

    centers.insert(node, center);
    end.max(center + own / 2.0)
}

fn shift_subtree(
    children: &HashMap<NodeIndex, Vec<NodeIndex>>,
    node: NodeIndex,
    delta: f64,
    centers: &mut HashMap<NodeIndex, f64>,
) {
    if let Some(center) = centers.get_mut(&node) {
        *center += delta;
    }
    for &child in &children[&node] {
        shift_subtree(children, child, delta, centers);
    }
}

fn cross_size(node: &FlowNode, direction: Direction) -> f64 {
    match direction {
        Direction::TopToBottom => node.width,
        Direction::LeftToRight => node.height,
    }
}

fn main_size(node: &FlowNode, direction: Direction) -> f64 {
    match direction {
        Direction::TopToBottom => node.height,
        Direction::LeftToRight => node.width,
    }
}

#[cfg(test)]
mod tests {
    use super::super::flow::{Direction, Flowchart, ROOT_ID};
    use crate::model::{EntryKind, HierarchyNode};

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

    fn sample() -> Vec<HierarchyNode> {
        vec![
            dir(
                "src",
                vec![
                    file("src/main.rs"),
                    file("src/lib.rs"),
                    dir("src/util", vec![file("src/util/io.rs")]),
                ],
            ),
            file("README.md"),
            file("Cargo.toml"),
        ]
    }

    #[test]
    fn positions_are_finite_and_deterministic() {
        let roots = sample();
        let first = Flowchart::build(&roots, "r", Direction::TopToBottom);
        let second = Flowchart::build(&roots, "r", Direction::TopToBottom);

        for (a, b) in first.nodes().zip(second.nodes()) {
            assert!(a.x.is_finite() && a.y.is_finite());
            assert_eq!(a.id, b.id);
            assert_eq!((a.x, a.y), (b.x, b.y));
        }
    }

    #[test]
    fn root_sits_on_the_bounding_box_midpoint() {
        let chart = Flowchart::build(&sample(), "r", Direction::TopToBottom);

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for node in chart.nodes() {
            let (cx, cy) = node.center();
            min_x = min_x.min(cx);
            max_x = max_x.max(cx);
            min_y = min_y.min(cy);
            max_y = max_y.max(cy);
        }

        let (root_x, root_y) = chart.root().center();
        assert!((root_x - (min_x + max_x) / 2.0).abs() < 1e-9);
        assert!((root_y - (min_y + max_y) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn no_two_nodes_overlap() {
        let chart = Flowchart::build(&sample(), "r", Direction::TopToBottom);
        let nodes: Vec<_> = chart.nodes().collect();

        for (i, a) in nodes.iter().enumerate() {
            for b in nodes.iter().skip(i + 1) {
                let separate_x = a.x + a.width <= b.x || b.x + b.width <= a.x;
                let separate_y = a.y + a.height <= b.y || b.y + b.height <= a.y;
                assert!(
                    separate_x || separate_y,
                    "nodes {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn direction_controls_the_flow_axis() {
        let roots = sample();

        let tb = Flowchart::build(&roots, "r", Direction::TopToBottom);
        let (_, root_y) = tb.root().center();
        let (_, child_y) = tb.node("README.md").unwrap().center();
        assert!(child_y > root_y);

        let lr = Flowchart::build(&roots, "r", Direction::LeftToRight);
        let (root_x, _) = lr.root().center();
        let (child_x, _) = lr.node("README.md").unwrap().center();
        assert!(child_x > root_x);
    }

    #[test]
    fn zigzag_hints_order_siblings_symmetrically() {
        // Three files under one directory: indices +1, -1, +2, so the
        // second file sits leftmost and the third rightmost.
        let roots = vec![dir(
            "d",
            vec![file("d/a.txt"), file("d/b.txt"), file("d/c.txt")],
        )];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let a = chart.node("d/a.txt").unwrap().center().0;
        let b = chart.node("d/b.txt").unwrap().center().0;
        let c = chart.node("d/c.txt").unwrap().center().0;
        assert!(b < a, "b should be left of a");
        assert!(a < c, "a should be left of c");
    }

    #[test]
    fn files_precede_folders_on_the_positive_side() {
        // One file (hint +1*2) and one folder (hint offset past the file
        // span, scaled by the folder multiplier): folder lands further out.
        let roots = vec![dir(
            "d",
            vec![file("d/a.txt"), dir("d/sub", vec![])],
        )];
        let chart = Flowchart::build(&roots, "r", Direction::TopToBottom);

        let file_x = chart.node("d/a.txt").unwrap().center().0;
        let folder_x = chart.node("d/sub").unwrap().center().0;
        assert!(folder_x > file_x);
    }

    #[test]
    fn ranks_advance_along_the_main_axis() {
        let chart = Flowchart::build(&sample(), "r", Direction::TopToBottom);

        let root_y = chart.root().center().1;
        let src_y = chart.node("src").unwrap().center().1;
        let util_y = chart.node("src/util").unwrap().center().1;
        let io_y = chart.node("src/util/io.rs").unwrap().center().1;
        assert!(root_y < src_y);
        assert!(src_y < util_y);
        assert!(util_y < io_y);
        assert_eq!(chart.node(ROOT_ID).unwrap().depth, 0);
    }
}
