//! Paginated document export.
//!
//! Re-renders the raw hierarchy — not the positioned graph — as indented
//! icon/text rows into a print-ready HTML document: one overview page, then
//! one page per directory, recursively depth-first. Pages are emitted
//! strictly one at a time, and nested entries are truncated so a single page
//! stays readable.

use super::escape;
use crate::model::{HierarchyNode, RepoRef};

/// Top-level entries shown on the overview page.
const OVERVIEW_LIMIT: usize = 9;
/// Children shown per nested entry before the "+ N more..." marker.
const NESTED_LIMIT: usize = 3;

const PAGE_CSS: &str = "\
    body { font-family: 'Inter', -apple-system, sans-serif; background: #ffffff; margin: 0; }\n\
    .page { padding: 24px; page-break-after: always; }\n\
    .title { font-size: 16px; color: #1e293b; margin-bottom: 15px; }\n\
    .page-title { font-size: 16px; color: #1e293b; margin-bottom: 8px; }\n\
    .page-summary { font-size: 12px; color: #64748b; margin-bottom: 15px; }\n\
    .node-container { margin: 4px 0; }\n\
    .folder-node { font-size: 13px; color: #1e293b; margin: 6px 0; }\n\
    .file-node { font-size: 11px; color: #64748b; margin-left: 24px; }\n\
    .node-icon { margin-right: 8px; }\n\
    .children-container { margin-left: 24px; border-left: 1px dashed #e2e8f0; padding-left: 12px; }\n\
    .more-items { font-size: 10px; color: #64748b; margin-left: 24px; }\n";

/// Render the paginated structure document for a repository hierarchy.
pub fn render_document(hierarchy: &[HierarchyNode], repo: &RepoRef) -> String {
    let mut pages: Vec<String> = Vec::new();
    pages.push(overview_page(hierarchy, repo));

    let mut ancestors = Vec::new();
    for node in hierarchy {
        if node.is_folder() {
            directory_pages(node, &mut ancestors, &mut pages);
        }
    }

    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset='utf-8'>\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&repo.label())));
    out.push_str(&format!("<style>\n{PAGE_CSS}</style>\n</head>\n<body>\n"));
    for page in pages {
        out.push_str("<div class='page'>\n");
        out.push_str(&page);
        out.push_str("</div>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn overview_page(hierarchy: &[HierarchyNode], repo: &RepoRef) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<div class='title'>\u{1F4E6} {}</div>\n",
        escape(&repo.label())
    ));
    for node in hierarchy.iter().take(OVERVIEW_LIMIT) {
        render_entry(node, &mut body);
    }
    if hierarchy.len() > OVERVIEW_LIMIT {
        body.push_str(&format!(
            "<div class='more-items'>+ {} more...</div>\n",
            hierarchy.len() - OVERVIEW_LIMIT
        ));
    }
    body
}

/// Emit the page for one directory, then recurse into its subdirectories.
fn directory_pages(node: &HierarchyNode, ancestors: &mut Vec<String>, pages: &mut Vec<String>) {
    let crumb = ancestors
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(node.name()))
        .collect::<Vec<_>>()
        .join(" / ");
    let folders = node.folder_children().count();
    let files = node.file_children().count();

    let mut body = String::new();
    body.push_str(&format!(
        "<div class='page-title'>\u{1F4C1} {}</div>\n",
        escape(&crumb)
    ));
    body.push_str(&format!(
        "<div class='page-summary'>{folders} folders \u{2022} {files} files</div>\n"
    ));
    for child in &node.children {
        render_entry(child, &mut body);
    }
    pages.push(body);

    ancestors.push(node.name().to_string());
    for child in node.folder_children() {
        directory_pages(child, ancestors, pages);
    }
    ancestors.pop();
}

/// One indented row; a folder entry shows at most [`NESTED_LIMIT`] of its
/// children, recursively, with a "+ N more..." marker for the rest.
fn render_entry(node: &HierarchyNode, out: &mut String) {
    out.push_str("<div class='node-container'>\n");

    let (class, icon) = if node.is_folder() {
        ("folder-node", "\u{1F4C1}")
    } else {
        ("file-node", "\u{1F4C4}")
    };
    out.push_str(&format!(
        "<div class='{class}'><span class='node-icon'>{icon}</span><span>{}</span></div>\n",
        escape(node.name())
    ));

    if node.is_folder() && !node.children.is_empty() {
        out.push_str("<div class='children-container'>\n");
        for child in node.children.iter().take(NESTED_LIMIT) {
            render_entry(child, out);
        }
        if node.children.len() > NESTED_LIMIT {
            out.push_str(&format!(
                "<div class='more-items'>+ {} more...</div>\n",
                node.children.len() - NESTED_LIMIT
            ));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;

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

    fn page_count(html: &str) -> usize {
        html.matches("<div class='page'>").count()
    }

    #[test]
    fn one_page_per_directory_plus_overview() {
        let hierarchy = vec![
            dir(
                "a",
                vec![file("a/x.txt"), dir("a/b", vec![file("a/b/y.txt")])],
            ),
            file("README.md"),
            dir("c", vec![]),
        ];
        let html = render_document(&hierarchy, &repo());
        // overview + a + a/b + c
        assert_eq!(page_count(&html), 4);
    }

    #[test]
    fn overview_truncates_past_nine_entries() {
        let hierarchy: Vec<HierarchyNode> =
            (0..12).map(|i| file(&format!("f{i}.txt"))).collect();
        let html = render_document(&hierarchy, &repo());

        assert_eq!(page_count(&html), 1);
        assert!(html.contains("+ 3 more..."));
        assert!(html.contains("f8.txt"));
        assert!(!html.contains("f9.txt"));
    }

    #[test]
    fn directory_pages_list_all_direct_children_but_truncate_nested() {
        let nested: Vec<HierarchyNode> =
            (0..5).map(|i| file(&format!("a/b/n{i}.txt"))).collect();
        let mut children: Vec<HierarchyNode> =
            (0..6).map(|i| file(&format!("a/d{i}.txt"))).collect();
        children.push(dir("a/b", nested));

        let html = render_document(&[dir("a", children)], &repo());

        // The page for "a" lists all six direct files.
        assert!(html.contains("d5.txt"));
        // Its nested directory shows three entries and a marker...
        assert!(html.contains("+ 2 more..."));
        // ...while the dedicated page for "a/b" lists all five.
        assert!(html.contains("n4.txt"));
    }

    #[test]
    fn directory_header_counts_direct_children() {
        let hierarchy = vec![dir(
            "src",
            vec![
                file("src/a.rs"),
                file("src/b.rs"),
                dir("src/util", vec![]),
            ],
        )];
        let html = render_document(&hierarchy, &repo());
        assert!(html.contains("1 folders \u{2022} 2 files"));
    }

    #[test]
    fn breadcrumbs_join_ancestor_names() {
        let hierarchy = vec![dir("a", vec![dir("a/b", vec![dir("a/b/c", vec![])])])];
        let html = render_document(&hierarchy, &repo());
        assert!(html.contains("a / b / c"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_document(&[file("<img>.txt")], &repo());
        assert!(html.contains("&lt;img&gt;.txt"));
    }
}
