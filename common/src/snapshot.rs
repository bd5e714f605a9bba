//! ホストのエンティティ状態スナップショット
//!
//! ブラウザの `hass.states`（entity_id → {state, attributes}）と
//! REST `/api/states`（配列）の両方を受け付ける。ホストの並び順は保持する。

use crate::error::Result;
use crate::normalize::normalize_name;
use crate::types::PlantRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 植物エンティティIDの既定プレフィックス
pub const DEFAULT_ENTITY_PREFIX: &str = "sensor.plant_tracker";

/// 1エンティティの状態
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// スナップショット（植物エンティティのみ、ホスト順）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<PlantRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }

    /// エンティティ列から植物エンティティだけを取り出す
    pub fn from_entities<I>(entities: I, entity_prefix: &str) -> Self
    where
        I: IntoIterator<Item = EntityState>,
    {
        let records = entities
            .into_iter()
            .filter(|e| e.entity_id.starts_with(entity_prefix))
            .map(|e| PlantRecord::from_entity(&e.entity_id, &e.state, &e.attributes))
            .collect();
        Self { records }
    }

    /// JSON値からパース
    ///
    /// * オブジェクト: `hass.states` 形式（キーがentity_id）
    /// * 配列: REST `/api/states` 形式
    pub fn from_value(value: Value, entity_prefix: &str) -> Result<Self> {
        // 植物以外のエンティティは中身を見ない
        let entities: Vec<EntityState> = match value {
            Value::Object(map) => map
                .into_iter()
                .filter(|(entity_id, _)| entity_id.starts_with(entity_prefix))
                .map(|(entity_id, raw)| -> Result<EntityState> {
                    let mut entity: EntityState = serde_json::from_value(raw)?;
                    entity.entity_id = entity_id;
                    Ok(entity)
                })
                .collect::<Result<_>>()?,
            Value::Array(items) => items
                .into_iter()
                .filter(|raw| {
                    raw.get("entity_id")
                        .and_then(Value::as_str)
                        .is_some_and(|id| id.starts_with(entity_prefix))
                })
                .map(|raw| -> Result<EntityState> { Ok(serde_json::from_value(raw)?) })
                .collect::<Result<_>>()?,
            other => serde_json::from_value(other)?,
        };
        Ok(Self::from_entities(entities, entity_prefix))
    }

    pub fn from_json(json: &str, entity_prefix: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value, entity_prefix)
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, entity_id: &str) -> Option<&PlantRecord> {
        self.records.iter().find(|r| r.id == entity_id)
    }

    /// entity_id 完全一致、なければ正規化した名前で検索
    pub fn find(&self, query: &str) -> Option<&PlantRecord> {
        self.get(query).or_else(|| {
            let wanted = normalize_name(query);
            self.records.iter().find(|r| normalize_name(&r.name) == wanted)
        })
    }
}
