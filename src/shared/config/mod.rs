//! Application configuration module
//!
//! Configuration comes from three layers, later ones winning:
//! built-in defaults, an optional TOML file, then environment variables.
//! Every field has a default so a file only needs the values it changes.
//!
//! ```toml
//! [github]
//! owner = "lirilabs"
//! repo = "liri-database-v1-2025"
//!
//! [limits]
//! delete_per_window = 5
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Remote repository and API client settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the contents API
    pub api_url: String,
    /// Base URL for raw file downloads
    pub raw_url: String,
    /// Access token, sent as `Authorization: Bearer`
    pub token: Option<String>,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Repository scanned by the versions endpoint
    pub versions_repo: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            raw_url: "https://raw.githubusercontent.com".to_string(),
            token: None,
            owner: "lirilabs".to_string(),
            repo: "liri-database-v1-2025".to_string(),
            branch: "main".to_string(),
            versions_repo: "liri-app-".to_string(),
            user_agent: "Liri-DB-Manager".to_string(),
            timeout_secs: 20,
        }
    }
}

impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_url", &self.api_url)
            .field("raw_url", &self.raw_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("versions_repo", &self.versions_repo)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Origins allowed by CORS; empty means any origin without credentials
    pub allowed_origins: Vec<String>,
    /// Delete requests must carry an `Authorization` header
    pub require_auth: bool,
    /// Adds remote error details to error responses
    pub development: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            allowed_origins: Vec::new(),
            require_auth: false,
            development: false,
        }
    }
}

/// Storage layout of the message store and image uploads
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub messages_root: String,
    pub images_root: String,
    /// Attempts per append when the remote reports a stale content hash
    pub max_append_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            messages_root: "messages".to_string(),
            images_root: "fall".to_string(),
            max_append_attempts: 3,
        }
    }
}

/// Rate limits and payload limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub list_per_window: usize,
    pub delete_per_window: usize,
    pub window_secs: u64,
    pub max_content_bytes: usize,
    pub max_image_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            list_per_window: 60,
            delete_per_window: 20,
            window_secs: 60,
            max_content_bytes: 1024 * 1024,
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

impl LimitsConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub github: GitHubConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get("GITHUB_TOKEN") {
            self.github.token = Some(token);
        }
        if let Some(v) = get("GITHUB_OWNER") {
            self.github.owner = v;
        }
        if let Some(v) = get("GITHUB_REPO") {
            self.github.repo = v;
        }
        if let Some(v) = get("GITHUB_BRANCH") {
            self.github.branch = v;
        }
        if let Some(v) = get("GITHUB_API_URL") {
            self.github.api_url = v;
        }
        if let Some(v) = get("GITHUB_RAW_URL") {
            self.github.raw_url = v;
        }
        if let Some(v) = get("GITHUB_VERSIONS_REPO") {
            self.github.versions_repo = v;
        }
        if let Some(v) = get("ALLOWED_ORIGINS") {
            self.server.allowed_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = get("REQUIRE_AUTH") {
            self.server.require_auth = v.trim().eq_ignore_ascii_case("true");
        }
        if let Some(v) = get("ENVIRONMENT") {
            self.server.development = v.trim().eq_ignore_ascii_case("development");
        }
        if let Some(v) = get("SERVER_PORT").or_else(|| get("PORT")) {
            self.server.port = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", v))?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github.owner.trim().is_empty() {
            return Err(ConfigError::MissingValue("github.owner"));
        }
        if self.github.repo.trim().is_empty() {
            return Err(ConfigError::MissingValue("github.repo"));
        }
        if self.github.branch.trim().is_empty() {
            return Err(ConfigError::MissingValue("github.branch"));
        }
        for url in [&self.github.api_url, &self.github.raw_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.store.max_append_attempts == 0 {
            return Err(ConfigError::InvalidValue(
                "store.max_append_attempts",
                "0".to_string(),
            ));
        }
        let limits = [
            ("limits.window_secs", self.limits.window_secs as usize),
            ("limits.list_per_window", self.limits.list_per_window),
            ("limits.delete_per_window", self.limits.delete_per_window),
            ("limits.max_content_bytes", self.limits.max_content_bytes),
            ("limits.max_image_bytes", self.limits.max_image_bytes),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::InvalidValue(name, "0".to_string()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.github.token = Some(token.into());
        self
    }

    /// Point both the contents API and raw downloads at one base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.github.raw_url = url.clone();
        self.config.github.api_url = url;
        self
    }

    pub fn repository(
        mut self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        self.config.github.owner = owner.into();
        self.config.github.repo = repo.into();
        self.config.github.branch = branch.into();
        self
    }

    pub fn versions_repo(mut self, repo: impl Into<String>) -> Self {
        self.config.github.versions_repo = repo.into();
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.config.server.allowed_origins = origins;
        self
    }

    pub fn require_auth(mut self, required: bool) -> Self {
        self.config.server.require_auth = required;
        self
    }

    pub fn development(mut self, development: bool) -> Self {
        self.config.server.development = development;
        self
    }

    pub fn rate_limits(mut self, list: usize, delete: usize) -> Self {
        self.config.limits.list_per_window = list;
        self.config.limits.delete_per_window = delete;
        self
    }

    pub fn max_content_bytes(mut self, max: usize) -> Self {
        self.config.limits.max_content_bytes = max;
        self
    }

    pub fn max_image_bytes(mut self, max: usize) -> Self {
        self.config.limits.max_image_bytes = max;
        self
    }

    pub fn max_append_attempts(mut self, attempts: u32) -> Self {
        self.config.store.max_append_attempts = attempts;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("failed to read config file {0}")]
    Io(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
}
