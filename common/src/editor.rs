//! 植物の追加/編集ワークフロー
//!
//! 状態遷移: `Closed → OpenForCreate → Closed` または `Closed → OpenForEdit → Closed`。
//! 確定1回につきコマンドは必ず1つ。検証失敗・削除の取り消し・キャンセルでは送らない。

use crate::command::{Command, PlantPayload};
use crate::error::{Error, Result};
use crate::normalize::normalize_name;
use crate::types::{PlantRecord, UNKNOWN};
use chrono::NaiveDate;

/// 新規作成時の既定値
pub mod defaults {
    pub const NAME: &str = "New Plant";
    pub const WATERING_INTERVAL: &str = "14";
    pub const WATERING_POSTPONED: &str = "0";
}

/// 編集中の下書き
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// 新規作成時のみ編集可能
    pub name: String,
    pub last_watered: String,
    pub last_fertilized: String,
    pub watering_interval: String,
    pub watering_postponed: String,
    pub inside: bool,
}

impl EditDraft {
    pub fn new_plant() -> Self {
        Self {
            name: defaults::NAME.to_string(),
            last_watered: UNKNOWN.to_string(),
            last_fertilized: UNKNOWN.to_string(),
            watering_interval: defaults::WATERING_INTERVAL.to_string(),
            watering_postponed: defaults::WATERING_POSTPONED.to_string(),
            inside: false,
        }
    }

    pub fn from_record(record: &PlantRecord) -> Self {
        Self {
            name: record.name.clone(),
            last_watered: record.last_watered.clone(),
            last_fertilized: record.last_fertilized.clone(),
            watering_interval: record.watering_interval_days.clone(),
            watering_postponed: record.watering_postponed_days.clone(),
            inside: record.is_inside(),
        }
    }

    pub fn water_today(&mut self, today: NaiveDate) {
        self.last_watered = format_date(today);
    }

    pub fn fertilize_today(&mut self, today: NaiveDate) {
        self.last_fertilized = format_date(today);
    }

    /// 延期日数を1増やす（数値でなければ0から数え直す）
    pub fn postpone(&mut self) {
        let current = self.watering_postponed.trim().parse::<i64>().unwrap_or(0);
        self.watering_postponed = current.saturating_add(1).to_string();
    }

    fn payload(&self, plant_name: &str) -> PlantPayload {
        PlantPayload {
            plant_name: plant_name.to_string(),
            last_watered: self.last_watered.clone(),
            last_fertilized: self.last_fertilized.clone(),
            watering_interval: self.watering_interval.clone(),
            watering_postponed: self.watering_postponed.clone(),
            inside: self.inside,
        }
    }
}

/// `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 編集画面の状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    OpenForCreate {
        draft: EditDraft,
    },
    OpenForEdit {
        entity_id: String,
        /// 編集前の植物名（ホスト側の識別子）
        plant_name: String,
        draft: EditDraft,
    },
}

/// 編集画面
#[derive(Debug, Clone, Default)]
pub struct PlantEditor {
    state: EditorState,
    error: Option<String>,
}

impl PlantEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.state, EditorState::OpenForCreate { .. })
    }

    /// 編集対象のentity_id（編集モードのみ）
    pub fn entity_id(&self) -> Option<&str> {
        match &self.state {
            EditorState::OpenForEdit { entity_id, .. } => Some(entity_id),
            _ => None,
        }
    }

    /// 画面タイトル
    pub fn title(&self) -> Option<String> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::OpenForCreate { .. } => Some("Add New Plant".to_string()),
            EditorState::OpenForEdit { plant_name, .. } => Some(plant_name.clone()),
        }
    }

    /// 入力エラー表示
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_create(&mut self) {
        self.state = EditorState::OpenForCreate {
            draft: EditDraft::new_plant(),
        };
        self.error = None;
    }

    pub fn open_edit(&mut self, record: &PlantRecord) {
        self.state = EditorState::OpenForEdit {
            entity_id: record.id.clone(),
            plant_name: record.name.clone(),
            draft: EditDraft::from_record(record),
        };
        self.error = None;
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::OpenForCreate { draft } | EditorState::OpenForEdit { draft, .. } => {
                Some(draft)
            }
        }
    }

    /// 下書きを編集する（前回の入力エラーは消える）
    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.error = None;
        match &mut self.state {
            EditorState::Closed => None,
            EditorState::OpenForCreate { draft } | EditorState::OpenForEdit { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn water_today(&mut self, today: NaiveDate) -> Result<()> {
        self.require_draft()?.water_today(today);
        Ok(())
    }

    pub fn fertilize_today(&mut self, today: NaiveDate) -> Result<()> {
        self.require_draft()?.fertilize_today(today);
        Ok(())
    }

    pub fn postpone(&mut self) -> Result<()> {
        self.require_draft()?.postpone();
        Ok(())
    }

    /// 確定
    ///
    /// 新規作成では `existing` の全レコードと正規化名を比較し、重複なら
    /// 画面を開いたまま `Error::DuplicateName` を返す。
    pub fn confirm(&mut self, existing: &[PlantRecord]) -> Result<Command> {
        let command = match &self.state {
            EditorState::Closed => {
                tracing::error!("confirm requested while the editor is closed");
                return Err(Error::EditorClosed);
            }
            EditorState::OpenForCreate { draft } => {
                let candidate = normalize_name(&draft.name);
                if existing.iter().any(|r| normalize_name(&r.name) == candidate) {
                    let error = Error::DuplicateName(draft.name.clone());
                    tracing::warn!(name = %draft.name, "plant name already exists");
                    self.error = Some(error.to_string());
                    return Err(error);
                }
                Command::CreatePlant(draft.payload(&draft.name))
            }
            EditorState::OpenForEdit { plant_name, draft, .. } => Command::UpdatePlant {
                plant_id: plant_name.clone(),
                payload: draft.payload(plant_name),
            },
        };

        self.close();
        Ok(command)
    }

    /// 削除確認の文言（編集モードのみ）
    pub fn delete_prompt(&self) -> Option<String> {
        match &self.state {
            EditorState::OpenForEdit { plant_name, .. } => {
                Some(format!("Are you sure you want to delete {}?", plant_name))
            }
            _ => None,
        }
    }

    /// 削除
    ///
    /// `confirm` が `false` を返したら何も変えずに `Ok(None)`。
    pub fn delete<F>(&mut self, confirm: F) -> Result<Option<Command>>
    where
        F: FnOnce(&str) -> bool,
    {
        let (prompt, plant_id) = match &self.state {
            EditorState::Closed => {
                tracing::error!("delete requested while the editor is closed");
                return Err(Error::EditorClosed);
            }
            EditorState::OpenForCreate { .. } => return Err(Error::NotEditing),
            EditorState::OpenForEdit { plant_name, .. } => (
                format!("Are you sure you want to delete {}?", plant_name),
                plant_name.clone(),
            ),
        };

        if !confirm(&prompt) {
            tracing::debug!(plant = %plant_id, "delete declined");
            return Ok(None);
        }

        self.close();
        Ok(Some(Command::DeletePlant { plant_id }))
    }

    /// キャンセル/閉じる（下書きは破棄）
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = EditorState::Closed;
        self.error = None;
    }

    fn require_draft(&mut self) -> Result<&mut EditDraft> {
        match self.draft_mut() {
            Some(draft) => Ok(draft),
            None => {
                tracing::error!("draft edit requested while the editor is closed");
                Err(Error::EditorClosed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Placement, StatusCode};

    fn record(name: &str) -> PlantRecord {
        PlantRecord {
            id: format!("sensor.plant_tracker_{}", name.to_lowercase()),
            name: name.to_string(),
            last_watered: "2026-10-01".to_string(),
            last_fertilized: UNKNOWN.to_string(),
            watering_interval_days: "7".to_string(),
            watering_postponed_days: "2".to_string(),
            days_since_watered: "18".to_string(),
            placement: Placement::Indoor,
            status: StatusCode::Overdue,
            image_ref: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_open_create_defaults() {
        let mut editor = PlantEditor::new();
        editor.open_create();

        let draft = editor.draft().unwrap();
        assert_eq!(draft.name, "New Plant");
        assert_eq!(draft.last_watered, "Unknown");
        assert_eq!(draft.last_fertilized, "Unknown");
        assert_eq!(draft.watering_interval, "14");
        assert_eq!(draft.watering_postponed, "0");
        assert!(!draft.inside);
        assert_eq!(editor.title().as_deref(), Some("Add New Plant"));
    }

    #[test]
    fn test_create_fern_emits_one_command() {
        let mut editor = PlantEditor::new();
        editor.open_create();
        {
            let draft = editor.draft_mut().unwrap();
            draft.name = "Fern".to_string();
            draft.watering_interval = "10".to_string();
        }

        let command = editor.confirm(&[record("Cactus")]).unwrap();

        assert_eq!(
            command,
            Command::CreatePlant(PlantPayload {
                plant_name: "Fern".to_string(),
                last_watered: "Unknown".to_string(),
                last_fertilized: "Unknown".to_string(),
                watering_interval: "10".to_string(),
                watering_postponed: "0".to_string(),
                inside: false,
            })
        );
        assert!(!editor.is_open());
    }

    #[test]
    fn test_create_duplicate_stays_open_with_error() {
        let mut editor = PlantEditor::new();
        editor.open_create();
        editor.draft_mut().unwrap().name = "fern ".to_string();

        let result = editor.confirm(&[record("Fern")]);

        assert!(matches!(result, Err(Error::DuplicateName(_))));
        assert!(editor.is_creating());
        assert_eq!(
            editor.error_message(),
            Some("A plant with this name already exists.")
        );
        assert_eq!(editor.draft().unwrap().name, "fern ");
    }

    #[test]
    fn test_error_cleared_on_next_edit() {
        let mut editor = PlantEditor::new();
        editor.open_create();
        editor.draft_mut().unwrap().name = "Fern".to_string();
        let _ = editor.confirm(&[record("Fern")]);

        editor.draft_mut().unwrap().name = "Fern 2".to_string();
        assert!(editor.error_message().is_none());
        assert!(editor.confirm(&[record("Fern")]).is_ok());
    }

    #[test]
    fn test_edit_uses_pre_edit_name() {
        let mut editor = PlantEditor::new();
        editor.open_edit(&record("Fern"));
        editor.draft_mut().unwrap().name = "Renamed".to_string();
        editor.water_today(today()).unwrap();

        match editor.confirm(&[record("Fern")]).unwrap() {
            Command::UpdatePlant { plant_id, payload } => {
                assert_eq!(plant_id, "Fern");
                assert_eq!(payload.plant_name, "Fern");
                assert_eq!(payload.last_watered, "2026-10-19");
                assert_eq!(payload.watering_interval, "7");
                assert!(payload.inside);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!editor.is_open());
    }

    #[test]
    fn test_quick_actions() {
        let mut editor = PlantEditor::new();
        editor.open_edit(&record("Fern"));
        editor.fertilize_today(today()).unwrap();
        editor.postpone().unwrap();
        editor.postpone().unwrap();

        let draft = editor.draft().unwrap();
        assert_eq!(draft.last_fertilized, "2026-10-19");
        assert_eq!(draft.watering_postponed, "4");
    }

    #[test]
    fn test_postpone_non_numeric_restarts() {
        let mut draft = EditDraft::new_plant();
        draft.watering_postponed = "Unknown".to_string();
        draft.postpone();
        assert_eq!(draft.watering_postponed, "1");
    }

    #[test]
    fn test_delete_declined_keeps_editor_open() {
        let mut editor = PlantEditor::new();
        editor.open_edit(&record("Fern"));

        let mut seen_prompt = String::new();
        let result = editor
            .delete(|prompt| {
                seen_prompt = prompt.to_string();
                false
            })
            .unwrap();

        assert!(result.is_none());
        assert_eq!(seen_prompt, "Are you sure you want to delete Fern?");
        assert_eq!(editor.entity_id(), Some("sensor.plant_tracker_fern"));
    }

    #[test]
    fn test_delete_confirmed() {
        let mut editor = PlantEditor::new();
        editor.open_edit(&record("Fern"));

        let command = editor.delete(|_| true).unwrap();

        assert_eq!(command, Some(Command::DeletePlant { plant_id: "Fern".to_string() }));
        assert!(!editor.is_open());
    }

    #[test]
    fn test_delete_not_available_when_creating() {
        let mut editor = PlantEditor::new();
        editor.open_create();
        assert!(matches!(editor.delete(|_| true), Err(Error::NotEditing)));
        assert!(editor.delete_prompt().is_none());
    }

    #[test]
    fn test_confirm_while_closed_is_error() {
        let mut editor = PlantEditor::new();
        assert!(matches!(editor.confirm(&[]), Err(Error::EditorClosed)));
        assert!(matches!(editor.postpone(), Err(Error::EditorClosed)));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = PlantEditor::new();
        editor.open_create();
        editor.draft_mut().unwrap().name = "Fern".to_string();
        editor.cancel();

        assert!(!editor.is_open());
        editor.open_create();
        assert_eq!(editor.draft().unwrap().name, "New Plant");
    }
}
