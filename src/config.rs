//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::directory::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS, SortField, SortOrder, ViewMode, ViewState};

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Backend REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://api.example.com/v1`. Empty disables fetching.
    pub url: String,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Initial view parameters for a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub items_per_page: usize,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub view_mode: ViewMode,
}

impl AppConfig {
    /// Get config file path in the per-user config directory.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "Gianged", "staff-directory")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.backend.url.is_empty() && !self.backend.url.starts_with("http") {
            return Err(ConfigError::Validation(
                "Backend URL must start with http:// or https://".to_string(),
            ));
        }
        if self.backend.timeout_secs < 1 {
            return Err(ConfigError::Validation(
                "Backend timeout must be at least 1 second".to_string(),
            ));
        }
        if !PAGE_SIZE_OPTIONS.contains(&self.view.items_per_page) {
            return Err(ConfigError::Validation(format!(
                "Items per page must be one of {PAGE_SIZE_OPTIONS:?}"
            )));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl BackendConfig {
    /// Whether a backend URL is configured.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Endpoint returning the employee list.
    pub fn employees_url(&self) -> String {
        format!("{base}/employees", base = self.url.trim_end_matches('/'))
    }
}

impl ViewConfig {
    /// Fresh view state seeded with these defaults.
    pub fn initial_state(&self) -> ViewState {
        let mut state = ViewState::new();
        state.set_items_per_page(self.items_per_page);
        state.set_sort_field(self.sort_field);
        state.set_sort_order(self.sort_order);
        state.set_view_mode(self.view_mode);
        state
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            view_mode: ViewMode::default(),
        }
    }
}
