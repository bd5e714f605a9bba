//! プレゼンター
//!
//! スナップショットを屋内/屋外の2リストに分け、タイル表示用の文字列を作る。
//! 並び替えはしない（ホスト順のまま）。

use crate::snapshot::Snapshot;
use crate::types::{format_number, parse_number, Placement, PlantRecord, UNKNOWN};

/// 配置で絞り込む（ホスト順を保持）
pub fn partition<'a>(snapshot: &'a Snapshot, placement: Placement) -> Vec<&'a PlantRecord> {
    snapshot
        .records()
        .iter()
        .filter(|r| r.placement == placement)
        .collect()
}

/// 屋内/屋外のグループ
#[derive(Debug, Clone, Default)]
pub struct PlantGroups<'a> {
    pub outdoor: Vec<&'a PlantRecord>,
    pub indoor: Vec<&'a PlantRecord>,
}

impl<'a> PlantGroups<'a> {
    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        Self {
            outdoor: partition(snapshot, Placement::Outdoor),
            indoor: partition(snapshot, Placement::Indoor),
        }
    }

    /// 表示順（屋外 → 屋内）
    pub fn sections(&self) -> [(Placement, &[&'a PlantRecord]); 2] {
        [
            (Placement::Outdoor, self.outdoor.as_slice()),
            (Placement::Indoor, self.indoor.as_slice()),
        ]
    }
}

/// タイル1枚分の表示データ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlantTile {
    pub entity_id: String,
    pub name: String,
    pub last_watered: String,
    pub last_fertilized: String,
    pub due: String,
    pub watering_postponed: String,
    pub background_color: &'static str,
}

impl PlantTile {
    pub fn from_record(record: &PlantRecord) -> Self {
        Self {
            entity_id: record.id.clone(),
            name: record.name.clone(),
            last_watered: format!("Last Watered: {}", record.last_watered),
            last_fertilized: format!("Last Fertilized: {}", record.last_fertilized),
            due: format!(
                "Due: {} / {} days",
                due_days(record).map(format_number).unwrap_or_else(|| UNKNOWN.to_string()),
                parse_number(&record.watering_interval_days)
                    .map(|v| format_number(v.round()))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
            ),
            watering_postponed: format!("Watering Postponed: {}", record.watering_postponed_days),
            background_color: record.status.background_color(),
        }
    }
}

/// 次の水やりまでの日数（間隔 − 経過日数）
///
/// 期限切れは負の値のまま返す。
pub fn due_days(record: &PlantRecord) -> Option<f64> {
    let interval = parse_number(&record.watering_interval_days)?;
    let since = parse_number(&record.days_since_watered)?;
    Some(interval - since)
}
