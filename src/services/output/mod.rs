// レポート出力
// 全ワーカーが共有する唯一の可変リソース

pub mod implementations;


// 公開API
pub use implementations::{ConsoleSink, SynchronizedSink};
