use crate::error::{PlantTrackerError, Result};
use plant_tracker_common::CardConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 例: `http://homeassistant.local:8123`
    pub base_url: Option<String>,
    /// 長期アクセストークン
    pub token: Option<String>,
    pub card: CardConfig,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            card: CardConfig::default(),
            timeout_seconds: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.card.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlantTrackerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("plant-tracker").join("config.json"))
    }

    pub fn get_base_url(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(url) = std::env::var("HASS_URL") {
            if !url.trim().is_empty() {
                return Ok(url.trim().trim_end_matches('/').to_string());
            }
        }

        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/').to_string())
            .ok_or(PlantTrackerError::MissingUrl)
    }

    pub fn get_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var("HASS_TOKEN") {
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }

        self.token.clone().ok_or(PlantTrackerError::MissingToken)
    }
}
