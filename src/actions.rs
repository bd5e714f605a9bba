//! サブコマンドごとの編集ワークフロー
//!
//! カードと同じ `PlantTrackerWidget` を使い、送るべきコマンドを組み立てる。
//! 送信は呼び出し側（main）が行う。

use crate::cli::FieldArgs;
use crate::error::{PlantTrackerError, Result};
use chrono::NaiveDate;
use plant_tracker_common::{Command, PlantTrackerWidget, Snapshot};

/// 編集内容
#[derive(Debug, Default, Clone)]
pub struct EditRequest {
    pub water: bool,
    pub fertilize: bool,
    pub postpone: bool,
    pub fields: FieldArgs,
    pub inside: Option<bool>,
}

/// 植物を追加
pub fn add_plant(
    snapshot: Snapshot,
    name: &str,
    fields: &FieldArgs,
    inside: bool,
) -> Result<Vec<Command>> {
    let mut widget = PlantTrackerWidget::with_snapshot(Vec::new(), snapshot);
    widget.open_editor(None)?;

    if let Some(draft) = widget.editor_mut().draft_mut() {
        draft.name = name.to_string();
        draft.inside = inside;
        fields.apply(draft);
    }

    widget.confirm()?;
    Ok(std::mem::take(widget.sink_mut()))
}

/// 植物を編集
pub fn edit_plant(
    snapshot: Snapshot,
    plant: &str,
    request: &EditRequest,
    today: NaiveDate,
) -> Result<Vec<Command>> {
    let entity_id = find_entity_id(&snapshot, plant)?;
    let mut widget = PlantTrackerWidget::with_snapshot(Vec::new(), snapshot);
    widget.open_editor(Some(&entity_id))?;

    let editor = widget.editor_mut();
    if let Some(draft) = editor.draft_mut() {
        request.fields.apply(draft);
        if let Some(inside) = request.inside {
            draft.inside = inside;
        }
    }
    if request.water {
        editor.water_today(today)?;
    }
    if request.fertilize {
        editor.fertilize_today(today)?;
    }
    if request.postpone {
        editor.postpone()?;
    }

    widget.confirm()?;
    Ok(std::mem::take(widget.sink_mut()))
}

/// 植物を削除（`confirm` が拒否したら空、失敗したら送らずにエラー）
pub fn delete_plant<F>(snapshot: Snapshot, plant: &str, confirm: F) -> Result<Vec<Command>>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let entity_id = find_entity_id(&snapshot, plant)?;
    let mut widget = PlantTrackerWidget::with_snapshot(Vec::new(), snapshot);
    widget.open_editor(Some(&entity_id))?;

    let mut prompt_error = None;
    let deleted = widget.delete(|prompt| match confirm(prompt) {
        Ok(answer) => answer,
        Err(e) => {
            prompt_error = Some(e);
            false
        }
    })?;

    if let Some(e) = prompt_error {
        tracing::error!("delete confirmation failed: {}", e);
        return Err(e);
    }
    if !deleted {
        widget.cancel();
    }
    Ok(std::mem::take(widget.sink_mut()))
}

fn find_entity_id(snapshot: &Snapshot, plant: &str) -> Result<String> {
    snapshot
        .find(plant)
        .map(|r| r.id.clone())
        .ok_or_else(|| PlantTrackerError::PlantNotFound(plant.to_string()))
}
