use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const CONFIG_FILE: &str = ".repoflow.toml";
const BACKEND_ENV: &str = "REPOFLOW_BACKEND_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to write config file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Color theme preference, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the viewer's color-scheme preference; exports fall back to
    /// light, which has no ambient scheme to consult.
    #[default]
    System,
}

impl Theme {
    /// Whether rendered output should use dark colors.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme {other:?} (expected light, dark, or system)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub theme: Theme,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    backend_url: Option<String>,
    theme: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load `.repoflow.toml` from the current directory (missing file means
    /// defaults), then apply the `REPOFLOW_BACKEND_URL` environment override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file(Path::new("."))?;
        if let Ok(url) = std::env::var(BACKEND_ENV)
            && !url.is_empty()
        {
            config.backend_url = url;
        }
        Ok(config)
    }

    /// Load the config file alone, without environment overrides.
    pub fn load_file(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let raw: RawConfig = toml::from_str(&content)?;
        Ok(Self {
            backend_url: raw
                .backend_url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            theme: raw.theme.unwrap_or_default(),
        })
    }

    /// Persist the theme preference, keeping other settings intact.
    pub fn save_theme(dir: &Path, theme: Theme) -> Result<(), ConfigError> {
        let path = dir.join(CONFIG_FILE);
        let mut raw: RawConfig = if path.exists() {
            toml::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            RawConfig::default()
        };
        raw.theme = Some(theme);
        std::fs::write(&path, toml::to_string_pretty(&raw)?)?;
        Ok(())
    }

    /// Starter config written by `repoflow init`.
    pub fn starter_toml() -> String {
        format!(
            "# repoflow configuration\n\
             #\n\
             # Base URL of the backend proxy. The REPOFLOW_BACKEND_URL\n\
             # environment variable takes precedence over this value.\n\
             backend_url = \"{DEFAULT_BACKEND_URL}\"\n\
             \n\
             # Color theme: \"light\", \"dark\", or \"system\".\n\
             theme = \"system\"\n"
        )
    }
}
