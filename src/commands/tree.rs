use crate::cli::TreeArgs;
use crate::hierarchy;
use crate::model::HierarchyNode;
use crate::style;
use colored::Colorize;

use super::{CommandContext, report_api_error};

pub fn cmd_tree(args: TreeArgs, ctx: &CommandContext) -> i32 {
    let rt = super::runtime();

    let response = match rt.block_on(ctx.client.repository_tree(
        &args.repo.owner,
        &args.repo.repo,
        args.branch.as_deref(),
    )) {
        Ok(response) => response,
        Err(e) => {
            report_api_error(&e);
            return 1;
        }
    };

    let roots = match hierarchy::build(&response.tree) {
        Ok(roots) => roots,
        Err(e) => {
            style::error(&format!("malformed tree listing: {e}"));
            return 1;
        }
    };

    style::header(&format!("{} ({})", args.repo, response.default_branch));
    for (i, node) in roots.iter().enumerate() {
        print_node(node, "", i == roots.len() - 1, 0, args.depth);
    }

    let (folders, files) = hierarchy::totals(&roots);
    println!();
    println!("{}", style::metric("folders", folders));
    println!("{}", style::metric("files", files));
    0
}

fn print_node(
    node: &HierarchyNode,
    prefix: &str,
    is_last: bool,
    depth: usize,
    max_depth: Option<usize>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_folder() {
        format!("{}/", node.name()).blue().bold().to_string()
    } else {
        node.name().to_string()
    };
    println!("{prefix}{connector}{name}");

    if node.children.is_empty() {
        return;
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    if let Some(max) = max_depth
        && depth + 1 >= max
    {
        println!("{child_prefix}└── {}", "…".dimmed());
        return;
    }
    for (i, child) in node.children.iter().enumerate() {
        print_node(
            child,
            &child_prefix,
            i == node.children.len() - 1,
            depth + 1,
            max_depth,
        );
    }
}
