mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, ServerConfig, DEFAULT_BIND};

use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `server.bind`
pub const ENV_BIND_VAR: &str = "HARAMBEE_BIND";

/// Get the config directory path (~/.config/harambee-trust/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("harambee-trust"))
}

/// Get the default config file path (~/.config/harambee-trust/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// An explicit `path` must exist. When `path` is None the default location is
/// used, and a missing file there yields the built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly requested config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed or contains unknown fields
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path()?, false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(
            "No config file at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    parse_config_file(&config_path)
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

/// Read the bind override from HARAMBEE_BIND.
/// Returns Some(addr) if the env var is set and non-empty, None otherwise.
pub fn get_bind_from_env() -> Option<String> {
    std::env::var(ENV_BIND_VAR)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Resolve the listen address: command line, then environment, then config.
pub fn resolve_bind(cli: Option<&str>, env: Option<&str>, config: &Config) -> Result<SocketAddr> {
    let raw = cli.or(env).unwrap_or(&config.server.bind);
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", raw))
}
