use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{DEFAULT_REFRESH_MINUTES, DEFAULT_STORE_PATH, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::domain::model::Hall;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    /// `locationNum` overrides keyed by hall name.
    pub halls: Option<HashMap<String, String>>,
    #[serde(default)]
    pub store: StoreConfig,
    pub segmenter: Option<SegmenterConfig>,
    pub refresh: Option<RefreshConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    pub footer_ends_dinner: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    pub interval_minutes: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn refresh_minutes(&self) -> u64 {
        self.refresh
            .as_ref()
            .and_then(|r| r.interval_minutes)
            .unwrap_or(DEFAULT_REFRESH_MINUTES)
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn footer_ends_dinner(&self) -> bool {
        self.segmenter
            .as_ref()
            .and_then(|s| s.footer_ends_dinner)
            .unwrap_or(false)
    }

    fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes() * 60)
    }

    fn location_num(&self, hall: Hall) -> String {
        self.halls
            .as_ref()
            .and_then(|halls| halls.get(hall.as_str()))
            .cloned()
            .unwrap_or_else(|| hall.location_num().to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_range("source.timeout_seconds", self.timeout_seconds(), 1, MAX_TIMEOUT_SECONDS)?;
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_file_extension("store.path", &self.store.path, &["json"])?;
        validation::validate_positive_number("refresh.interval_minutes", self.refresh_minutes(), 1)?;

        if let Some(halls) = &self.halls {
            for (name, location) in halls {
                if Hall::from_name(name).is_none() {
                    return Err(MenuError::InvalidConfigValueError {
                        field: "halls".to_string(),
                        value: name.clone(),
                        reason: "Unknown hall. Valid halls: wucox, cjl, whitman, roma, forbes, grad"
                            .to_string(),
                    });
                }
                validation::validate_non_empty_string(&format!("halls.{}", name), location)?;
            }
        }

        Ok(())
    }
}
