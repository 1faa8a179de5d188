use std::{collections::HashMap, path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::{domain::potter::Category, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Art Institute of Chicago API settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ArticConfig {
    pub base_url: String,
    pub page_size: u32,
    pub related_limit: u32,
    pub timeout_secs: u64,
}

impl Default for ArticConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.artic.edu/api/v1".to_string(),
            page_size: 20,
            related_limit: 10,
            timeout_secs: 20,
        }
    }
}

/// Potter DB API settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PotterConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub page_sizes: HashMap<String, u32>,
}

impl Default for PotterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.potterdb.com/v1".to_string(),
            timeout_secs: 20,
            page_sizes: HashMap::new(),
        }
    }
}

impl PotterConfig {
    /// Configured page size for a category, falling back to its default
    pub fn page_size(&self, category: Category) -> u32 {
        self.page_sizes
            .get(category.path())
            .copied()
            .unwrap_or_else(|| category.default_page_size())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 350 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub artic: ArticConfig,
    #[serde(default)]
    pub potter: PotterConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load the embedded defaults overlaid by any user config file
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(utils::get_config_dir())
    }

    pub fn from_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
        // Fail early with a readable message if the embedded file is broken
        json5::from_str::<serde_json::Value>(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;

        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                tracing::info!(path = %path.display(), "Loading user config");
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let must_be_positive = |key: &str| {
            ConfigError::Message(format!("{key} must be greater than zero"))
        };
        if self.search.debounce_ms == 0 {
            return Err(must_be_positive("search.debounce_ms"));
        }
        if self.artic.page_size == 0 {
            return Err(must_be_positive("artic.page_size"));
        }
        let mut sizes: Vec<_> = self.potter.page_sizes.iter().collect();
        sizes.sort();
        if let Some((category, _)) = sizes.into_iter().find(|(_, size)| **size == 0) {
            return Err(must_be_positive(&format!("potter.page_sizes.{category}")));
        }
        Ok(())
    }
}
