// サービス層 - 機能別の具象実装
// 各サービスはcoreのトレイトを実装し、疎結合で設計されている

pub mod config;
pub mod output;

// 公開API
pub use config::{parse_input, DefaultLaunchConfig};
pub use output::{ConsoleSink, SynchronizedSink};
