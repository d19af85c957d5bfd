use crate::core::engine::{SearchPolicy, DEFAULT_LOOKUP_ID_OFFSET};
use crate::domain::model::SearchMode;
use crate::utils::error::{Result, VenueError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub geocoder: GeocoderSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderSettings {
    pub endpoint: String,
    pub limit: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub id_offset: u32,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODER_ENDPOINT.to_string(),
            limit: 5,
            timeout_seconds: 10,
            user_agent: concat!("venue-finder/", env!("CARGO_PKG_VERSION")).to_string(),
            id_offset: DEFAULT_LOOKUP_ID_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub default_mode: SearchMode,
    pub apply_capacity_to_lookup: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VenueError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VenueError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEOCODER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VenueError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            lookup_id_offset: self.geocoder.id_offset,
            apply_capacity_to_lookup: self.search.apply_capacity_to_lookup,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("geocoder.endpoint", &self.geocoder.endpoint)?;
        validation::validate_range("geocoder.limit", self.geocoder.limit, 1, 50)?;
        validation::validate_range(
            "geocoder.timeout_seconds",
            self.geocoder.timeout_seconds,
            1,
            300,
        )?;
        validation::validate_non_empty_string("geocoder.user_agent", &self.geocoder.user_agent)?;
        // 保留 1-99 給本地目錄
        validation::validate_range(
            "geocoder.id_offset",
            self.geocoder.id_offset,
            DEFAULT_LOOKUP_ID_OFFSET,
            u32::MAX - self.geocoder.limit,
        )?;
        validation::validate_log_level("logging.level", &self.logging.level)?;
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
