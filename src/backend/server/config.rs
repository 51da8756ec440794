/**
 * Server Configuration
 *
 * Loads `AppConfig` for the server binary.
 *
 * # Configuration Sources
 *
 * 1. Built-in defaults
 * 2. The TOML file named by `REPOSTORE_CONFIG`, if set
 * 3. Environment variables (`GITHUB_TOKEN`, `GITHUB_OWNER`, `GITHUB_REPO`,
 *    `GITHUB_BRANCH`, `ALLOWED_ORIGINS`, `REQUIRE_AUTH`, `ENVIRONMENT`,
 *    `SERVER_PORT`/`PORT`, ...)
 *
 * # Error Handling
 *
 * An unreadable or invalid configuration stops startup. A missing token does
 * not: the server starts and every remote call answers
 * "Server configuration error" until it is configured.
 */

use crate::shared::config::{AppConfig, ConfigError};

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_PATH_VAR: &str = "REPOSTORE_CONFIG";

/// Load configuration from file and environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_file(path.trim())?
        }
        _ => AppConfig::default(),
    };

    config.apply_env()?;
    config.validate()?;

    if config.github.token.is_none() {
        tracing::error!("GITHUB_TOKEN not configured; remote requests will fail");
    }
    tracing::info!(
        "Using repository {}/{} on branch {}",
        config.github.owner,
        config.github.repo,
        config.github.branch
    );

    Ok(config)
}
