use shared_types::{AppConfig, ShellConfig};

/// `config.toml` at the workspace root, baked in at compile time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config. Falls back to defaults if it is malformed.
pub fn load() -> ShellConfig {
    parse_or_default(CONFIG_TOML)
}

fn parse_or_default(contents: &str) -> ShellConfig {
    match AppConfig::from_toml(contents) {
        Ok(config) => {
            tracing::info!(
                app_name = %config.shell.app_name,
                api_base_url = %config.shell.api_base_url,
                "shell config loaded"
            );
            config.shell
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse config.toml; using defaults");
            ShellConfig::default()
        }
    }
}
