//! ホストへ送るサービス呼び出し
//!
//! すべて `plant_tracker` ドメインの fire-and-forget 呼び出し。

use serde::Serialize;
use serde_json::Value;

/// サービスドメイン
pub const SERVICE_DOMAIN: &str = "plant_tracker";

/// 植物フィールド一式（create/update の共通ペイロード）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantPayload {
    pub plant_name: String,
    pub last_watered: String,
    pub last_fertilized: String,
    pub watering_interval: String,
    pub watering_postponed: String,
    pub inside: bool,
}

/// ホストへのコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreatePlant(PlantPayload),
    /// `plant_id` は編集前の植物名
    UpdatePlant { plant_id: String, payload: PlantPayload },
    DeletePlant { plant_id: String },
    /// 全植物の「水やりからの日数」再計算
    RefreshDaysSinceWatered,
}

impl Command {
    pub fn domain(&self) -> &'static str {
        SERVICE_DOMAIN
    }

    /// サービス名
    pub fn service(&self) -> &'static str {
        match self {
            Command::CreatePlant(_) => "create_plant",
            Command::UpdatePlant { .. } => "update_plant",
            Command::DeletePlant { .. } => "delete_plant",
            Command::RefreshDaysSinceWatered => "update_days_since_watered",
        }
    }

    /// サービスデータ（JSONオブジェクト）
    pub fn service_data(&self) -> Value {
        #[derive(Serialize)]
        struct Update<'a> {
            plant_id: &'a str,
            #[serde(flatten)]
            payload: &'a PlantPayload,
        }

        #[derive(Serialize)]
        struct Delete<'a> {
            plant_id: &'a str,
        }

        let value = match self {
            Command::CreatePlant(payload) => serde_json::to_value(payload),
            Command::UpdatePlant { plant_id, payload } => {
                serde_json::to_value(Update { plant_id, payload })
            }
            Command::DeletePlant { plant_id } => serde_json::to_value(Delete { plant_id }),
            Command::RefreshDaysSinceWatered => Ok(Value::Object(Default::default())),
        };
        // 文字列と真偽値だけの構造体なので失敗しない
        value.unwrap_or_default()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {}", self.domain(), self.service(), self.service_data())
    }
}

/// コマンドの送出先
///
/// 戻り値は使わない（結果は次のスナップショットで観測する）。
pub trait CommandSink {
    fn dispatch(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn dispatch(&mut self, command: Command) {
        self.push(command);
    }
}
