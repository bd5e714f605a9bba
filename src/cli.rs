use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plant-tracker")]
#[command(about = "Home Assistantの植物トラッカーを操作するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Home Assistantの代わりに状態JSONファイルを読む（/api/states 形式 または hass.states 形式）
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// サービス呼び出しを送信せずJSONで表示
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 屋外/屋内の植物一覧を表示
    List {
        /// 画像の有無も確認する
        #[arg(long)]
        images: bool,
    },

    /// 植物を追加
    Add {
        /// 植物名
        #[arg(short, long, required = true)]
        name: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// 屋内の植物
        #[arg(long)]
        inside: bool,
    },

    /// 植物を編集
    Edit {
        /// entity_id または植物名
        #[arg(required = true)]
        plant: String,

        /// 今日水やりした
        #[arg(long)]
        water: bool,

        /// 今日肥料をあげた
        #[arg(long)]
        fertilize: bool,

        /// 水やりを1日延期
        #[arg(long)]
        postpone: bool,

        #[command(flatten)]
        fields: FieldArgs,

        /// 屋内かどうか (true/false)
        #[arg(long)]
        inside: Option<bool>,
    },

    /// 植物を削除
    Delete {
        /// entity_id または植物名
        #[arg(required = true)]
        plant: String,

        /// 確認せずに削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 全植物の「水やりからの日数」を再計算させる
    Refresh,

    /// 設定を表示/編集
    Config {
        /// Home AssistantのURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// アクセストークンを設定
        #[arg(long)]
        set_token: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 下書きに上書きするフィールド
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// 最終水やり日 (YYYY-MM-DD)
    #[arg(long)]
    pub last_watered: Option<String>,

    /// 最終施肥日 (YYYY-MM-DD)
    #[arg(long)]
    pub last_fertilized: Option<String>,

    /// 水やり間隔（日）
    #[arg(long)]
    pub interval: Option<String>,

    /// 延期日数
    #[arg(long)]
    pub postponed: Option<String>,
}

impl FieldArgs {
    pub fn apply(&self, draft: &mut plant_tracker_common::EditDraft) {
        if let Some(v) = &self.last_watered {
            draft.last_watered = v.clone();
        }
        if let Some(v) = &self.last_fertilized {
            draft.last_fertilized = v.clone();
        }
        if let Some(v) = &self.interval {
            draft.watering_interval = v.clone();
        }
        if let Some(v) = &self.postponed {
            draft.watering_postponed = v.clone();
        }
    }
}
