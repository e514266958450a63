use crate::cli::GraphArgs;
use crate::export;
use crate::hierarchy;
use crate::layout::Flowchart;
use crate::model::RepoRef;
use crate::serve::{self, ServeState};
use crate::style;

use super::{CommandContext, report_api_error};

pub fn cmd_graph(args: GraphArgs, ctx: &CommandContext) -> i32 {
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

    let hierarchy = match hierarchy::build(&response.tree) {
        Ok(hierarchy) => hierarchy,
        Err(e) => {
            style::error(&format!("malformed tree listing: {e}"));
            return 1;
        }
    };
    let repo = RepoRef {
        owner: args.repo.owner.clone(),
        repo: args.repo.repo.clone(),
        default_branch: response.default_branch,
    };

    if args.serve {
        let state = ServeState {
            hierarchy,
            repo,
            theme: ctx.config.theme,
            direction: args.direction,
        };
        if let Err(e) = rt.block_on(serve::serve(state, args.port, args.open)) {
            style::error(&format!("Server failed: {}", e));
            return 1;
        }
    } else if let Some(path) = &args.export {
        let chart = Flowchart::build(&hierarchy, &repo.label(), args.direction);
        let svg = export::render_svg(&chart, &repo, ctx.config.theme);
        if let Err(e) = std::fs::write(path, svg) {
            style::error(&format!("Failed to write export file: {}", e));
            return 1;
        }
        style::success(&format!("Flowchart exported to: {}", style::path(path)));
    } else if let Some(path) = &args.export_doc {
        let html = export::render_document(&hierarchy, &repo);
        if let Err(e) = std::fs::write(path, html) {
            style::error(&format!("Failed to write export file: {}", e));
            return 1;
        }
        style::success(&format!(
            "Structure document exported to: {}",
            style::path(path)
        ));
    } else {
        style::error("Use --serve to start the viewer, or --export/--export-doc to write a file");
        return 1;
    }

    0
}
