use crate::cli::InitArgs;
use crate::config::Config;
use crate::style;

pub fn cmd_init(args: InitArgs) -> i32 {
    let config_path = args.path.join(".repoflow.toml");
    if config_path.exists() {
        style::error(&format!(
            ".repoflow.toml already exists at {}",
            style::path(&config_path)
        ));
        return 1;
    }

    if let Err(e) = std::fs::write(&config_path, Config::starter_toml()) {
        style::error(&format!("Failed to write config file: {}", e));
        return 1;
    }

    style::success(&format!(
        "Created .repoflow.toml at {}",
        style::path(&config_path)
    ));
    style::hint("REPOFLOW_BACKEND_URL overrides the configured backend_url");
    0
}
