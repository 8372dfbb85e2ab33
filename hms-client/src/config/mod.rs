use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the API gateway, e.g. `http://localhost:9191`.
    pub base_url: String,
    /// Per-request deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionSettings {
    /// File the session record persists to across restarts. When absent the
    /// session lives in memory only.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

/// Load settings from `config/base.yaml` (when present) layered under
/// `HMS`-prefixed environment variables, e.g. `HMS_API__BASE_URL`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_file = base_path.join("config").join("base.yaml");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_file).required(false))
        .add_source(
            config::Environment::with_prefix("HMS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
