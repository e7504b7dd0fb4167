// ソート競争のエラー型定義
// ソートアルゴリズムとレポート整形は失敗しないため、エラーは出力と実行基盤に限られる

use thiserror::Error;

/// ソート競争で発生しうるエラー
#[derive(Error, Debug)]
pub enum SortRaceError {
    #[error("出力シンクエラー: {source}")]
    SinkError {
        #[source]
        source: std::io::Error,
    },

    #[error("ワーカータスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },
}

impl SortRaceError {
    /// 出力シンクエラーの作成
    pub fn sink(source: std::io::Error) -> Self {
        Self::SinkError { source }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SinkError { .. } | Self::TaskError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
        }
    }

    /// プロセス全体を終了させるべきエラーかどうか
    ///
    /// 壊れた標準出力には回復手段がないため、シンクの失敗は再試行しない。
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SinkError { .. } | Self::TaskError { .. })
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// ソート競争の結果型
pub type SortRaceResult<T> = std::result::Result<T, SortRaceError>;

impl From<tokio::task::JoinError> for SortRaceError {
    fn from(error: tokio::task::JoinError) -> Self {
        SortRaceError::TaskError { source: error }
    }
}
