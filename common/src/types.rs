//! 植物レコードの型定義
//!
//! ホストのエンティティ状態（`{state, attributes}`）から読み取る読み取り専用ビュー。
//! 欠損・不正な属性は失敗させず "Unknown" に倒す。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 欠損値の表示文字列
pub const UNKNOWN: &str = "Unknown";

/// ホスト側の属性名
pub mod attr {
    pub const PLANT_NAME: &str = "plant_name";
    pub const LAST_WATERED: &str = "last_watered";
    pub const LAST_FERTILIZED: &str = "last_fertilized";
    pub const WATERING_INTERVAL: &str = "watering_interval";
    pub const WATERING_POSTPONED: &str = "watering_postponed";
    pub const DAYS_SINCE_WATERED: &str = "days_since_watered";
    pub const INSIDE: &str = "inside";
    pub const IMAGE: &str = "image";
}

/// 屋内/屋外の配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Indoor,
    Outdoor,
}

impl Placement {
    pub fn from_inside(inside: bool) -> Self {
        if inside {
            Placement::Indoor
        } else {
            Placement::Outdoor
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, Placement::Indoor)
    }

    /// セクション見出し
    pub fn heading(&self) -> &'static str {
        match self {
            Placement::Indoor => "Indoor Plants",
            Placement::Outdoor => "Outdoor Plants",
        }
    }
}

/// ホストが算出する水やり状態（エンティティの state）
///
/// - 3: 今日水やり済み
/// - 2: 間隔内
/// - 1: 注意
/// - 0: 期限切れ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Overdue,
    Warning,
    Ok,
    WateredToday,
    Unknown,
}

impl StatusCode {
    pub fn from_state(state: &str) -> Self {
        match state.trim() {
            "0" => StatusCode::Overdue,
            "1" => StatusCode::Warning,
            "2" => StatusCode::Ok,
            "3" => StatusCode::WateredToday,
            _ => StatusCode::Unknown,
        }
    }

    /// タイル背景色
    pub fn background_color(&self) -> &'static str {
        match self {
            StatusCode::WateredToday => "rgba(30,144,255,0.25)",
            StatusCode::Ok => "rgba(0, 128, 0, 0.25)",
            StatusCode::Warning => "rgba(255,165,0,0.25)",
            StatusCode::Overdue => "rgba(255, 0, 0,0.25)",
            StatusCode::Unknown => "rgba(0, 0, 0, 0.25)",
        }
    }
}

/// 植物レコード（1エンティティ分）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// ホストのエンティティID
    pub id: String,
    pub name: String,
    pub last_watered: String,
    pub last_fertilized: String,
    pub watering_interval_days: String,
    pub watering_postponed_days: String,
    /// 表示専用（ホストが更新する）
    pub days_since_watered: String,
    pub placement: Placement,
    pub status: StatusCode,
    pub image_ref: Option<String>,
}

impl PlantRecord {
    /// エンティティの state と attributes からレコードを組み立てる
    pub fn from_entity(id: &str, state: &str, attributes: &Map<String, Value>) -> Self {
        let read = |key: &str| attribute_string(attributes.get(key));

        Self {
            id: id.to_string(),
            name: read(attr::PLANT_NAME),
            last_watered: read(attr::LAST_WATERED),
            last_fertilized: read(attr::LAST_FERTILIZED),
            watering_interval_days: read(attr::WATERING_INTERVAL),
            watering_postponed_days: read(attr::WATERING_POSTPONED),
            days_since_watered: read(attr::DAYS_SINCE_WATERED),
            placement: Placement::from_inside(matches!(
                attributes.get(attr::INSIDE),
                Some(Value::Bool(true))
            )),
            status: StatusCode::from_state(state),
            image_ref: match attributes.get(attr::IMAGE) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                _ => None,
            },
        }
    }

    pub fn is_inside(&self) -> bool {
        self.placement.is_inside()
    }
}

/// 属性値を表示文字列として読む
///
/// 文字列はそのまま、数値は整数なら小数点なしで返す。
/// 欠損・null・空文字・配列/オブジェクトは "Unknown"。
pub fn attribute_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::Bool(b)) => b.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// 数値を表示用に整形（`14.0` → `"14"`）
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// 数値文字列をパース（前後の空白は無視）
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
