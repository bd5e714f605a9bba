//! カード設定（Lovelace の `setConfig` で渡される）

use crate::error::{Error, Result};
use crate::image::{DEFAULT_IMAGE_NAME, DEFAULT_IMAGE_PATH};
use crate::snapshot::DEFAULT_ENTITY_PREFIX;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub entity_prefix: String,
    pub image_path: String,
    pub default_image: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "Plant Tracker".to_string(),
            entity_prefix: DEFAULT_ENTITY_PREFIX.to_string(),
            image_path: DEFAULT_IMAGE_PATH.to_string(),
            default_image: DEFAULT_IMAGE_NAME.to_string(),
        }
    }
}

impl CardConfig {
    /// JSON値から読み込む（未知のキーは無視）
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: CardConfig = match value {
            serde_json::Value::Null => CardConfig::default(),
            other => serde_json::from_value(other)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entity_prefix.trim().is_empty() {
            return Err(Error::Config("entity_prefix must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_and_unknown_keys() {
        let config = CardConfig::from_value(json!({ "type": "custom:plant-tracker-card" })).unwrap();
        assert_eq!(config, CardConfig::default());
        assert_eq!(config.title, "Plant Tracker");
        assert_eq!(config.entity_prefix, "sensor.plant_tracker");
    }

    #[test]
    fn test_override_title() {
        let config = CardConfig::from_value(json!({ "title": "Balcony" })).unwrap();
        assert_eq!(config.title, "Balcony");
        assert_eq!(config.image_path, "/local/plant_tracker");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let result = CardConfig::from_value(json!({ "entity_prefix": " " }));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_null_is_default() {
        assert_eq!(CardConfig::from_value(serde_json::Value::Null).unwrap(), CardConfig::default());
    }
}
