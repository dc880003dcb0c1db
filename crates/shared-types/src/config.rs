use serde::{Deserialize, Serialize};

/// Shell settings loaded from the `[shell]` table of `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Absolute base URL of the session service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_app_name() -> String {
    "MediCare".to_string()
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            api_base_url: default_api_base_url(),
            login_path: default_login_path(),
        }
    }
}

impl ShellConfig {
    /// Join an endpoint onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
