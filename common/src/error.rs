//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// 新規作成時の名前重複（編集画面にそのまま表示する文言）
    #[error("A plant with this name already exists.")]
    DuplicateName(String),

    /// 編集画面が開いていない状態での操作
    #[error("Editor is not open")]
    EditorClosed,

    /// 新規作成中に削除が要求された
    #[error("Delete is only available while editing an existing plant")]
    NotEditing,

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
