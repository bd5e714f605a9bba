//! Home Assistant REST API クライアント
//!
//! - `GET /api/states` でスナップショット取得
//! - `POST /api/services/{domain}/{service}` でコマンド送信
//! - 画像の存在確認（`/local/...` は認証不要）

use crate::error::{PlantTrackerError, Result};
use plant_tracker_common::{Command, ImageProbe, Snapshot};
use std::future::Future;
use std::time::Duration;

pub struct HomeAssistantClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HomeAssistantClient {
    pub fn new(base_url: &str, token: &str, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 全エンティティの状態を取得
    pub async fn fetch_snapshot(&self, entity_prefix: &str) -> Result<Snapshot> {
        let url = format!("{}/api/states", self.base_url);
        tracing::debug!(%url, "fetching states");

        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        if !response.status().is_success() {
            return Err(PlantTrackerError::Api(format!(
                "GET /api/states: {}",
                response.status()
            )));
        }

        let value: serde_json::Value = response.json().await?;
        Ok(Snapshot::from_value(value, entity_prefix)?)
    }

    /// サービス呼び出し
    pub async fn call_service(&self, command: &Command) -> Result<()> {
        let url = services_url(&self.base_url, command);
        tracing::debug!(%url, "calling service");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&command.service_data())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlantTrackerError::Api(format!(
                "{}.{}: {}",
                command.domain(),
                command.service(),
                response.status()
            )));
        }
        Ok(())
    }

    /// 画像の存在確認用プローブ
    pub fn image_probe(&self) -> HttpProbe {
        HttpProbe { http: self.http.clone() }
    }
}

pub fn services_url(base_url: &str, command: &Command) -> String {
    format!(
        "{}/api/services/{}/{}",
        base_url.trim_end_matches('/'),
        command.domain(),
        command.service()
    )
}

/// HTTP GET で画像の存在を確認する
pub struct HttpProbe {
    http: reqwest::Client,
}

impl ImageProbe for HttpProbe {
    fn probe(&self, url: &str) -> impl Future<Output = bool> {
        let request = self.http.get(url);
        async move {
            match request.send().await {
                Ok(response) => response.status().is_success(),
                Err(e) => {
                    tracing::debug!("image probe failed: {}", e);
                    false
                }
            }
        }
    }
}
