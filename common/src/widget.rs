//! カード本体のワークフロー
//!
//! ホストから受け取ったスナップショット、編集画面、コマンド送出先をまとめる。
//! 描画はビュー層（WASMカード / CLI）が担当する。

use crate::command::{Command, CommandSink};
use crate::editor::PlantEditor;
use crate::error::{Error, Result};
use crate::presenter::PlantGroups;
use crate::snapshot::Snapshot;

pub struct PlantTrackerWidget<S> {
    sink: S,
    snapshot: Snapshot,
    editor: PlantEditor,
    attached: bool,
}

impl<S: CommandSink> PlantTrackerWidget<S> {
    /// ホスト未接続の状態で生成
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            snapshot: Snapshot::default(),
            editor: PlantEditor::new(),
            attached: false,
        }
    }

    /// 取得済みスナップショットで生成（起動時の再計算要求は送らない）
    pub fn with_snapshot(sink: S, snapshot: Snapshot) -> Self {
        Self {
            sink,
            snapshot,
            editor: PlantEditor::new(),
            attached: true,
        }
    }

    /// ホストからのスナップショット更新
    ///
    /// 最初の1回だけ「水やりからの日数」の再計算を要求する。
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        if !self.attached {
            self.attached = true;
            self.dispatch(Command::RefreshDaysSinceWatered);
        }
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn groups(&self) -> PlantGroups<'_> {
        PlantGroups::from_snapshot(&self.snapshot)
    }

    pub fn editor(&self) -> &PlantEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut PlantEditor {
        &mut self.editor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// 編集画面を開く（`None` なら新規作成）
    pub fn open_editor(&mut self, entity_id: Option<&str>) -> Result<()> {
        match entity_id {
            None => self.editor.open_create(),
            Some(id) => {
                let record = self
                    .snapshot
                    .get(id)
                    .ok_or_else(|| Error::UnknownEntity(id.to_string()))?;
                self.editor.open_edit(record);
            }
        }
        Ok(())
    }

    /// 確定してコマンドを送る
    pub fn confirm(&mut self) -> Result<()> {
        let command = self.editor.confirm(self.snapshot.records())?;
        self.dispatch(command);
        Ok(())
    }

    /// 削除（確認で拒否されたら `Ok(false)`）
    pub fn delete<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        match self.editor.delete(confirm)? {
            Some(command) => {
                self.dispatch(command);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    fn dispatch(&mut self, command: Command) {
        tracing::info!(service = command.service(), "dispatching {}", command);
        self.sink.dispatch(command);
    }
}
