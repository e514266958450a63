use crate::cli::ThemeArgs;
use crate::config::Config;
use crate::style;
use std::path::Path;

/// Persist the theme preference in `.repoflow.toml`.
pub fn cmd_theme(args: ThemeArgs) -> i32 {
    match Config::save_theme(Path::new("."), args.theme) {
        Ok(()) => {
            style::success(&format!("Theme preference saved: {}", args.theme));
            0
        }
        Err(e) => {
            style::error(&format!("Failed to save theme: {}", e));
            1
        }
    }
}
