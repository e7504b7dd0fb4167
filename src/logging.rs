// 診断ログの初期化
// レポート行は標準出力、ログは標準エラー出力に分離する

use tracing_subscriber::EnvFilter;

/// ログフィルタの既定値を取得
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "sort_race=debug"
    } else {
        "sort_race=warn"
    }
}

/// tracingサブスクライバーを初期化する
///
/// `RUST_LOG`が設定されていればそちらを優先する。2回目以降の呼び出しは無視される。
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
