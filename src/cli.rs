use crate::config::Theme;
use crate::layout::Direction;
use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "repoflow")]
#[command(about = "Visualize GitHub repositories as interactive flowcharts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend proxy base URL (overrides REPOFLOW_BACKEND_URL and the config file)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Color theme for rendered output (overrides the config file)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a user's profile and repositories
    Profile(ProfileArgs),

    /// Show a repository's language distribution
    Langs(LangsArgs),

    /// Print a repository's file tree to the terminal
    Tree(TreeArgs),

    /// Build the repository flowchart: serve it interactively or export it
    Graph(GraphArgs),

    /// Persist the preferred color theme
    Theme(ThemeArgs),

    /// Generate a starter .repoflow.toml configuration file
    Init(InitArgs),
}

/// A repository named as `owner/repo`.
#[derive(Debug, Clone)]
pub struct RepoSpec {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(format!("expected owner/repo, got {s:?}")),
        }
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileArgs {
    /// GitHub username
    pub username: String,

    /// List the user's starred repositories instead of their own
    #[arg(long)]
    pub starred: bool,

    /// Sort order for the repository list
    #[arg(long, default_value = "updated")]
    pub sort: SortKey,

    /// Show at most this many repositories
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct LangsArgs {
    /// Repository as owner/repo
    pub repo: RepoSpec,
}

#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Repository as owner/repo
    pub repo: RepoSpec,

    /// Branch to list (defaults to the repository's default branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Maximum directory depth to print
    #[arg(short, long)]
    pub depth: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct GraphArgs {
    /// Repository as owner/repo
    pub repo: RepoSpec,

    /// Branch to visualize (defaults to the repository's default branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Layout direction
    #[arg(long, default_value = "top-to-bottom")]
    pub direction: Direction,

    /// Start the HTTP server for interactive visualization
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP server
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Open the browser automatically
    #[arg(long)]
    pub open: bool,

    /// Export the flowchart as an SVG file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export the hierarchy as a paginated HTML document
    #[arg(long, value_name = "FILE")]
    pub export_doc: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Most recently updated first
    #[default]
    Updated,
    /// Most starred first
    Stars,
    /// Most forked first
    Forks,
    /// Alphabetical by name
    Name,
}

#[derive(Parser, Debug, Clone)]
pub struct ThemeArgs {
    /// Theme to persist: light, dark, or system
    pub theme: Theme,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create .repoflow.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_spec_parses_owner_and_name() {
        let spec: RepoSpec = "rust-lang/cargo".parse().unwrap();
        assert_eq!(spec.owner, "rust-lang");
        assert_eq!(spec.repo, "cargo");
        assert_eq!(spec.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn repo_spec_rejects_malformed_input() {
        assert!("cargo".parse::<RepoSpec>().is_err());
        assert!("/cargo".parse::<RepoSpec>().is_err());
        assert!("rust-lang/".parse::<RepoSpec>().is_err());
        assert!("a/b/c".parse::<RepoSpec>().is_err());
    }
}
