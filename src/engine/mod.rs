// ソート競争エンジン
// ワーカーの起動・待機とワーカー単体の実行

pub mod launcher;
pub mod worker;

// 公開API
pub use launcher::Launcher;
pub use worker::{Worker, WorkerOutcome};
