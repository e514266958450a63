mod graph;
mod init;
mod langs;
mod profile;
mod theme;
mod tree;

pub use graph::cmd_graph;
pub use init::cmd_init;
pub use langs::cmd_langs;
pub use profile::cmd_profile;
pub use theme::cmd_theme;
pub use tree::cmd_tree;

use crate::api::{ApiClient, ApiError};
use crate::config::{Config, Theme};
use crate::style;

/// Shared context for command execution: resolved configuration plus the
/// backend client.
pub struct CommandContext {
    pub config: Config,
    pub client: ApiClient,
}

impl CommandContext {
    /// Load config (file, then environment), apply CLI overrides, and build
    /// the API client. Returns Err(exit_code) if setup fails.
    pub fn new(backend: Option<&str>, theme: Option<Theme>) -> Result<Self, i32> {
        let mut config = Config::load().unwrap_or_else(|e| {
            style::warning(&format!("Failed to load config: {}. Using defaults.", e));
            Config::default()
        });
        if let Some(url) = backend {
            config.backend_url = url.to_string();
        }
        if let Some(theme) = theme {
            config.theme = theme;
        }

        let client = match ApiClient::new(&config.backend_url) {
            Ok(client) => client,
            Err(e) => {
                style::error(&e.to_string());
                return Err(1);
            }
        };

        Ok(Self { config, client })
    }
}

/// Commands are synchronous entry points; each builds a runtime to drive the
/// async client.
pub(crate) fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("Failed to create tokio runtime")
}

/// Surface an API failure once, with static troubleshooting hints for
/// connectivity problems. Failures are never retried.
pub(crate) fn report_api_error(err: &ApiError) {
    style::error(&err.to_string());
    if matches!(err, ApiError::Connect { .. } | ApiError::ErrorPage { .. }) {
        style::hint("check that the backend proxy is running and reachable");
        style::hint("the base URL comes from --backend, REPOFLOW_BACKEND_URL, or .repoflow.toml");
    }
}
