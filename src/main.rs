use clap::Parser;
use repoflow::cli::{Cli, Command};
use repoflow::commands::{
    CommandContext, cmd_graph, cmd_init, cmd_langs, cmd_profile, cmd_theme, cmd_tree,
};

fn main() {
    let Cli {
        command,
        backend,
        theme,
    } = Cli::parse();

    let exit_code = match command {
        // Local-only commands need no backend client.
        Command::Theme(args) => cmd_theme(args),
        Command::Init(args) => cmd_init(args),

        Command::Profile(args) => with_context(backend, theme, |ctx| cmd_profile(args, ctx)),
        Command::Langs(args) => with_context(backend, theme, |ctx| cmd_langs(args, ctx)),
        Command::Tree(args) => with_context(backend, theme, |ctx| cmd_tree(args, ctx)),
        Command::Graph(args) => with_context(backend, theme, |ctx| cmd_graph(args, ctx)),
    };

    std::process::exit(exit_code);
}

fn with_context(
    backend: Option<String>,
    theme: Option<repoflow::config::Theme>,
    run: impl FnOnce(&CommandContext) -> i32,
) -> i32 {
    match CommandContext::new(backend.as_deref(), theme) {
        Ok(ctx) => run(&ctx),
        Err(code) => code,
    }
}
