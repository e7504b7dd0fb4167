// 起動設定

pub mod implementations;

// 公開API
pub use implementations::{parse_input, DefaultLaunchConfig};
