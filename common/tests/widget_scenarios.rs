//! カード操作のシナリオテスト
//!
//! ホストのスナップショットを受け取ってから、追加・編集・削除で
//! 送られるコマンドを検証

use plant_tracker_common::{
    Command, PlantPayload, PlantTrackerWidget, Snapshot, DEFAULT_ENTITY_PREFIX,
};
use serde_json::json;

fn snapshot(value: serde_json::Value) -> Snapshot {
    Snapshot::from_value(value, DEFAULT_ENTITY_PREFIX).expect("スナップショットのパース失敗")
}

/// 「Fern」がない状態で新規作成 → create_plant が1回だけ送られる
#[test]
fn test_create_fern_without_existing() {
    let mut widget = PlantTrackerWidget::new(Vec::new());
    widget.push_snapshot(snapshot(json!({
        "sensor.plant_tracker_cactus": { "state": "2", "attributes": { "plant_name": "Cactus" } }
    })));

    widget.open_editor(None).unwrap();
    {
        let draft = widget.editor_mut().draft_mut().unwrap();
        draft.name = "Fern".to_string();
        draft.watering_interval = "10".to_string();
    }
    widget.confirm().expect("作成に失敗");

    let creates: Vec<_> = widget
        .sink()
        .iter()
        .filter(|c| matches!(c, Command::CreatePlant(_)))
        .collect();
    assert_eq!(creates.len(), 1);
    assert_eq!(
        creates[0],
        &Command::CreatePlant(PlantPayload {
            plant_name: "Fern".to_string(),
            last_watered: "Unknown".to_string(),
            last_fertilized: "Unknown".to_string(),
            watering_interval: "10".to_string(),
            watering_postponed: "0".to_string(),
            inside: false,
        })
    );
    assert!(!widget.editor().is_open());
}

/// 既存の「Fern」に対して "fern " で作成 → 何も送られずエラー表示
#[test]
fn test_create_duplicate_fern() {
    let mut widget = PlantTrackerWidget::with_snapshot(
        Vec::new(),
        snapshot(json!({
            "sensor.plant_tracker_fern": { "state": "3", "attributes": { "plant_name": "Fern" } }
        })),
    );

    widget.open_editor(None).unwrap();
    widget.editor_mut().draft_mut().unwrap().name = "fern ".to_string();

    assert!(widget.confirm().is_err());
    assert!(widget.sink().is_empty());
    assert_eq!(
        widget.editor().error_message(),
        Some("A plant with this name already exists.")
    );
}

/// アクセント付きの既存名とも衝突する
#[test]
fn test_create_duplicate_with_accents() {
    let mut widget = PlantTrackerWidget::with_snapshot(
        Vec::new(),
        snapshot(json!([
            { "entity_id": "sensor.plant_tracker_aloe_vera", "state": "2", "attributes": { "plant_name": "Aloë  Vera" } }
        ])),
    );

    widget.open_editor(None).unwrap();
    widget.editor_mut().draft_mut().unwrap().name = "aloe vera".to_string();

    assert!(widget.confirm().is_err());
    assert!(widget.sink().is_empty());
}

/// 削除を拒否 → 何も送られず同じ植物の編集画面のまま
#[test]
fn test_delete_declined() {
    let mut widget = PlantTrackerWidget::with_snapshot(
        Vec::new(),
        snapshot(json!({
            "sensor.plant_tracker_fern": { "state": "2", "attributes": { "plant_name": "Fern" } }
        })),
    );

    widget.open_editor(Some("sensor.plant_tracker_fern")).unwrap();
    let deleted = widget.delete(|_| false).unwrap();

    assert!(!deleted);
    assert!(widget.sink().is_empty());
    assert_eq!(widget.editor().entity_id(), Some("sensor.plant_tracker_fern"));
}

/// 編集画面をキャンセル → 何も送られない
#[test]
fn test_cancel_sends_nothing() {
    let mut widget = PlantTrackerWidget::with_snapshot(Vec::new(), Snapshot::default());

    widget.open_editor(None).unwrap();
    widget.editor_mut().draft_mut().unwrap().name = "Basil".to_string();
    widget.cancel();

    assert!(widget.sink().is_empty());
    assert!(!widget.editor().is_open());
}
