use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static APP_CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Origin that `blob:` media references are resolved against
    pub origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Number of mock products generated at startup
    pub product_count: u32,
    /// Seed for the mock `date_added` values, so restarts show the same order
    pub seed: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory with the built frontend (trunk output)
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[storage]
origin = "http://127.0.0.1:54321"

[catalog]
product_count = 360
seed = 381

[static_files]
dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

/// Make the loaded configuration available to request handlers.
/// Only the first call has an effect.
pub fn set_app_config(config: Config) -> &'static Config {
    APP_CONFIG.get_or_init(|| config)
}

pub fn app_config() -> anyhow::Result<&'static Config> {
    APP_CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("configuration is not loaded"))
}

pub fn default_config() -> anyhow::Result<Config> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Get the static files directory from configuration.
/// Relative paths are resolved against the current directory, the way
/// `trunk build` lays out `dist/` next to the workspace root.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.static_files.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.product_count, 360);
        assert_eq!(config.static_files.dir, "dist");
        assert!(config.storage.origin.starts_with("http"));
    }

    #[test]
    fn test_partial_config_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[server]\nport = 8080\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = default_config().unwrap();
        let abs = std::env::temp_dir().join("storefront-dist");
        config.static_files.dir = abs.to_string_lossy().into_owned();
        assert_eq!(get_static_dir(&config), abs);
    }
}
