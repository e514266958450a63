//! SVG snapshot of the positioned flowchart.
//!
//! Rendered from the model rather than captured from a live surface, so the
//! output carries no pan/zoom chrome, minimap, or edge animation. File
//! labels and overflow links are real anchors pointing at the code host.

use super::{depth_color, escape};
use crate::config::Theme;
use crate::layout::{Direction, FlowNode, Flowchart, ROOT_ID};
use crate::model::RepoRef;

const PADDING: f64 = 40.0;
const EDGE_COLOR: &str = "#90a4ae";

struct Palette {
    background: &'static str,
    text: &'static str,
}

fn palette(theme: Theme) -> Palette {
    if theme.is_dark() {
        Palette {
            background: "#111827",
            text: "#f9fafb",
        }
    } else {
        Palette {
            background: "#ffffff",
            text: "#111827",
        }
    }
}

/// Serialize the flowchart as a standalone SVG document.
pub fn render_svg(chart: &Flowchart, repo: &RepoRef, theme: Theme) -> String {
    let colors = palette(theme);

    // The synthetic root always exists, so the bounding box is never empty.
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for node in chart.nodes() {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x + node.width);
        max_y = max_y.max(node.y + node.height);
    }
    let width = max_x - min_x + 2.0 * PADDING;
    let height = max_y - min_y + 2.0 * PADDING;
    let view_x = min_x - PADDING;
    let view_y = min_y - PADDING;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         viewBox=\"{view_x} {view_y} {width} {height}\" \
         width=\"{width}\" height=\"{height}\" \
         font-family=\"-apple-system, 'Segoe UI', Roboto, sans-serif\">\n"
    ));
    out.push_str(&format!(
        "<rect x=\"{view_x}\" y=\"{view_y}\" width=\"{width}\" height=\"{height}\" \
         fill=\"{}\"/>\n",
        colors.background
    ));

    for edge in chart.edges() {
        let (Some(source), Some(target)) = (chart.node(&edge.source), chart.node(&edge.target))
        else {
            continue;
        };
        out.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{EDGE_COLOR}\" stroke-width=\"2\"/>\n",
            edge_path(source, target, chart.direction())
        ));
    }

    for node in chart.nodes() {
        push_node(&mut out, node, repo, &colors);
    }

    out.push_str("</svg>\n");
    out
}

fn edge_path(source: &FlowNode, target: &FlowNode, direction: Direction) -> String {
    match direction {
        Direction::TopToBottom => {
            let sx = source.x + source.width / 2.0;
            let sy = source.y + source.height;
            let tx = target.x + target.width / 2.0;
            let ty = target.y;
            let my = (sy + ty) / 2.0;
            format!("M {sx} {sy} C {sx} {my}, {tx} {my}, {tx} {ty}")
        }
        Direction::LeftToRight => {
            let sx = source.x + source.width;
            let sy = source.y + source.height / 2.0;
            let tx = target.x;
            let ty = target.y + target.height / 2.0;
            let mx = (sx + tx) / 2.0;
            format!("M {sx} {sy} C {mx} {sy}, {mx} {ty}, {tx} {ty}")
        }
    }
}

fn push_node(out: &mut String, node: &FlowNode, repo: &RepoRef, colors: &Palette) {
    let is_root = node.id == ROOT_ID;
    let border = if is_root { "#1e88e5" } else { depth_color(node.depth) };
    let icon = if is_root {
        "\u{1F4E6}"
    } else if node.is_folder {
        "\u{1F4C1}"
    } else {
        "\u{1F4C4}"
    };

    out.push_str(&format!("<g transform=\"translate({}, {})\">\n", node.x, node.y));
    out.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" rx=\"8\" fill=\"{border}\" \
         fill-opacity=\"0.25\" stroke=\"{border}\" stroke-width=\"2\"/>\n",
        node.width, node.height
    ));

    let label = format!(
        "<text x=\"12\" y=\"24\" font-size=\"13\" font-weight=\"500\" fill=\"{}\">{} {}</text>",
        colors.text,
        icon,
        escape(&node.label)
    );
    if is_root || node.is_folder {
        out.push_str(&label);
        out.push('\n');
    } else {
        out.push_str(&format!(
            "<a href=\"{}\">{label}</a>\n",
            escape(&repo.blob_url(&node.id))
        ));
    }

    if let Some(compacted) = &node.compacted {
        let column = node.width / 2.0;
        for (i, name) in compacted.names.iter().enumerate() {
            let x = 12.0 + (i % 2) as f64 * column;
            let y = 48.0 + (i / 2) as f64 * 24.0;
            let path = format!("{}/{}", node.id, name);
            out.push_str(&format!(
                "<a href=\"{}\"><text x=\"{x}\" y=\"{y}\" font-size=\"11\" \
                 fill=\"{}\">{}</text></a>\n",
                escape(&repo.blob_url(&path)),
                colors.text,
                escape(name)
            ));
        }
        if let Some(overflow) = compacted.overflow_label() {
            out.push_str(&format!(
                "<a href=\"{}\"><text x=\"{}\" y=\"{}\" font-size=\"10\" \
                 text-anchor=\"middle\" fill=\"#1e88e5\">{}</text></a>\n",
                escape(&repo.tree_url(&node.id)),
                node.width / 2.0,
                node.height - 10.0,
                escape(&overflow)
            ));
        }
    }

    out.push_str("</g>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn repo() -> RepoRef {
        RepoRef {
            owner: "octocat".into(),
            repo: "hello".into(),
            default_branch: "main".into(),
        }
    }

    #[test]
    fn every_node_label_appears() {
        let roots = vec![dir("src", vec![file("src/main.rs")]), file("README.md")];
        let chart = Flowchart::build(&roots, "octocat/hello", Direction::TopToBottom);
        let svg = render_svg(&chart, &repo(), Theme::Light);

        assert!(svg.contains("octocat/hello"));
        assert!(svg.contains("main.rs"));
        assert!(svg.contains("README.md"));
        assert!(svg.contains("https://github.com/octocat/hello/blob/main/README.md"));
    }

    #[test]
    fn compacted_overflow_links_to_the_folder_view() {
        let children = (0..15).map(|i| file(&format!("d/f{i}.txt"))).collect();
        let chart = Flowchart::build(&[dir("d", children)], "r", Direction::TopToBottom);
        let svg = render_svg(&chart, &repo(), Theme::Light);

        assert!(svg.contains("+3 more files"));
        assert!(svg.contains("https://github.com/octocat/hello/tree/main/d"));
        // Hidden files are not rendered anywhere.
        assert!(!svg.contains("f13.txt"));
    }

    #[test]
    fn theme_selects_the_background() {
        let chart = Flowchart::build(&[], "r", Direction::TopToBottom);
        let light = render_svg(&chart, &repo(), Theme::Light);
        let dark = render_svg(&chart, &repo(), Theme::Dark);
        let system = render_svg(&chart, &repo(), Theme::System);

        assert!(light.contains("#ffffff"));
        assert!(dark.contains("#111827"));
        // System has no ambient scheme to consult in an export.
        assert!(system.contains("#ffffff"));
    }

    #[test]
    fn labels_are_escaped() {
        let chart = Flowchart::build(
            &[file("a<b>.txt")],
            "r",
            Direction::TopToBottom,
        );
        let svg = render_svg(&chart, &repo(), Theme::Light);
        assert!(svg.contains("a&lt;b&gt;.txt"));
        assert!(!svg.contains("a<b>.txt</text>"));
    }

    #[test]
    fn output_is_deterministic() {
        let roots = vec![dir("src", vec![file("src/a.rs"), file("src/b.rs")])];
        let chart = Flowchart::build(&roots, "r", Direction::LeftToRight);
        assert_eq!(
            render_svg(&chart, &repo(), Theme::Dark),
            render_svg(&chart, &repo(), Theme::Dark)
        );
    }
}
