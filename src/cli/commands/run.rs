use crate::cli::Cli;
use crate::core::{LaunchConfig, LaunchSummary, ReportSink, SortRaceResult};
use crate::engine::Launcher;
use crate::services::ConsoleSink;

/// 任意のシンクに対して設定どおりにソート競争を実行する
pub async fn execute_with_sink<C, S>(config: &C, sink: S) -> SortRaceResult<LaunchSummary>
where
    C: LaunchConfig,
    S: ReportSink + 'static,
{
    Launcher::new(sink).run(config).await
}

/// Execute the sort race against stdout
pub async fn execute(cli: &Cli) -> SortRaceResult<LaunchSummary> {
    let config = cli.to_config()?;
    let sink = ConsoleSink::console(config.output_format());
    execute_with_sink(&config, sink).await
}
