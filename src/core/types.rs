// ソート競争に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 組み込みの入力配列
pub const DEFAULT_INPUT: [i64; 9] = [4, 1, 3, 2, 8, 5, 1, 9, 7];

/// 「元の配列」レポートに使うラベル
pub const ORIGINAL_LABEL: &str = "original";

/// 実行可能なソートアルゴリズムの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// 標準ライブラリのソート（比較用ベースライン）
    #[value(alias = "quick")]
    Library,
    /// 隣接交換ソート（バブルソート）
    #[value(alias = "bubble")]
    Exchange,
    /// 選択ソート
    Selection,
}

impl AlgorithmKind {
    /// 全アルゴリズム（既定の実行順）
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Library,
        AlgorithmKind::Exchange,
        AlgorithmKind::Selection,
    ];

    /// レポート行に表示するラベル
    pub const fn label(self) -> &'static str {
        match self {
            Self::Library => "quick",
            Self::Exchange => "bubble",
            Self::Selection => "selection",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// レポート行の出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Sort: <label>` / `Result: ...` の2行形式
    #[default]
    Text,
    /// 1行1オブジェクトのJSON
    Json,
}

/// ワーカーの状態遷移
///
/// `Created → Running → Formatting → AwaitingSink → WritingSink → Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkerState {
    Created,
    Running,
    Formatting,
    AwaitingSink,
    WritingSink,
    Done,
}

impl WorkerState {
    /// 次の状態。`Done`は終端
    pub const fn next(self) -> Option<WorkerState> {
        match self {
            Self::Created => Some(Self::Running),
            Self::Running => Some(Self::Formatting),
            Self::Formatting => Some(Self::AwaitingSink),
            Self::AwaitingSink => Some(Self::WritingSink),
            Self::WritingSink => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// ランチャー実行のサマリー（ソート結果そのものは含まない）
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSummary {
    pub workers_started: usize,
    pub workers_completed: usize,
    pub elapsed_ms: u64,
}
