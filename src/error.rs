use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantTrackerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Home AssistantのURLが設定されていません。`plant-tracker config --set-url http://homeassistant.local:8123` で設定してください")]
    MissingUrl,

    #[error("アクセストークンが設定されていません。`plant-tracker config --set-token TOKEN` または HASS_TOKEN で設定してください")]
    MissingToken,

    #[error("植物が見つかりません: {0}")]
    PlantNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API呼び出しエラー: {0}")]
    Api(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Core(#[from] plant_tracker_common::Error),
}

pub type Result<T> = std::result::Result<T, PlantTrackerError>;
