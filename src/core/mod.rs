// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{ErrorSeverity, SortRaceError, SortRaceResult};
pub use traits::{LaunchConfig, ReportSink, SortAlgorithm};
pub use types::{
    AlgorithmKind, LaunchSummary, OutputFormat, WorkerState, DEFAULT_INPUT, ORIGINAL_LABEL,
};
