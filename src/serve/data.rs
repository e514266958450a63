use crate::config::Theme;
use crate::layout::{Direction, FlowEdge, FlowNode, Flowchart};
use crate::model::{CODE_HOST, HierarchyNode, RepoRef};
use serde::Serialize;

/// Flowchart payload in the shape the embedded viewer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct FlowchartData {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub metadata: FlowchartMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowchartMetadata {
    pub owner: String,
    pub repo: String,
    pub default_branch: String,
    pub host: String,
    pub direction: Direction,
    pub theme: Theme,
    pub node_count: usize,
    pub edge_count: usize,
    pub compacted_count: usize,
}

impl FlowchartData {
    /// Lay the flowchart out from scratch and package it with the metadata
    /// the viewer needs to build code-host links.
    pub fn build(
        hierarchy: &[HierarchyNode],
        repo: &RepoRef,
        direction: Direction,
        theme: Theme,
    ) -> Self {
        let chart = Flowchart::build(hierarchy, &repo.label(), direction);
        let nodes: Vec<FlowNode> = chart.nodes().cloned().collect();
        let edges = chart.edges();
        let metadata = FlowchartMetadata {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            default_branch: repo.default_branch.clone(),
            host: CODE_HOST.to_string(),
            direction,
            theme,
            node_count: nodes.len(),
            edge_count: edges.len(),
            compacted_count: nodes.iter().filter(|n| n.compacted.is_some()).count(),
        };
        Self {
            nodes,
            edges,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryKind, HierarchyNode};

    fn repo() -> RepoRef {
        RepoRef {
            owner: "octocat".into(),
            repo: "hello".into(),
            default_branch: "main".into(),
        }
    }

    #[test]
    fn metadata_counts_match_the_payload() {
        let hierarchy = vec![HierarchyNode {
            path: "src".into(),
            kind: EntryKind::Tree,
            sha: None,
            children: vec![HierarchyNode {
                path: "src/main.rs".into(),
                kind: EntryKind::Blob,
                sha: None,
                children: Vec::new(),
            }],
        }];

        let data = FlowchartData::build(
            &hierarchy,
            &repo(),
            Direction::TopToBottom,
            Theme::System,
        );
        assert_eq!(data.metadata.node_count, data.nodes.len());
        assert_eq!(data.metadata.edge_count, data.edges.len());
        assert_eq!(data.metadata.compacted_count, 0);
        assert_eq!(data.metadata.host, CODE_HOST);
    }

    #[test]
    fn payload_serializes_with_short_direction_codes() {
        let data = FlowchartData::build(&[], &repo(), Direction::LeftToRight, Theme::Dark);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["metadata"]["direction"], "lr");
        assert_eq!(json["metadata"]["theme"], "dark");
        assert_eq!(json["nodes"][0]["id"], "__repo_root__");
    }
}
