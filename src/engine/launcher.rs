// Launcher - 共有シンクを注入したワーカー起動・待機

use super::worker::Worker;
use crate::{
    core::{
        AlgorithmKind, LaunchConfig, LaunchSummary, ReportSink, SortRaceError, SortRaceResult,
        ORIGINAL_LABEL,
    },
    reporting::ReportLine,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// アルゴリズムごとに1ワーカーを起動し、全員の完了を待つランチャー
///
/// 出力シンクはコンストラクタで注入され、ワーカー間で共有される唯一の可変リソースとなる。
/// ワーカー同士の完了順序は保証しない。
pub struct Launcher<S> {
    sink: Arc<S>,
}

impl<S> Launcher<S>
where
    S: ReportSink + 'static,
{
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// 元の配列をレポートする
    ///
    /// ワーカー起動前に呼べば、全ワーカーのレポートより先に出力される。
    pub async fn emit_original(&self, input: &[i64]) -> SortRaceResult<()> {
        self.sink
            .emit(&ReportLine::new(ORIGINAL_LABEL, input.to_vec()))
            .await
    }

    /// 全ワーカーを起動し、全員の完了まで待機する
    ///
    /// 途中でワーカーが失敗しても残りのワーカーの完了を待ち、最初のエラーを返す。
    /// 呼び出し側に返すのは件数のサマリーのみ。
    pub async fn launch(
        &self,
        input: &[i64],
        algorithms: &[AlgorithmKind],
    ) -> SortRaceResult<LaunchSummary> {
        let start_time = Instant::now();
        let shared_input: Arc<[i64]> = Arc::from(input);

        info!(
            workers = algorithms.len(),
            input_len = input.len(),
            "launching sort workers"
        );

        let handles: Vec<_> = algorithms
            .iter()
            .enumerate()
            .map(|(worker_id, &kind)| {
                let worker = Worker::new(
                    worker_id,
                    kind,
                    Arc::clone(&shared_input),
                    Arc::clone(&self.sink),
                );
                tokio::spawn(worker.run())
            })
            .collect();

        let mut workers_completed = 0;
        let mut first_error: Option<SortRaceError> = None;

        for handle in handles {
            match handle.await {
                Ok(Ok(outcome)) => {
                    workers_completed += 1;
                    debug!(
                        worker_id = outcome.worker_id,
                        algorithm = %outcome.kind,
                        "worker done"
                    );
                }
                Ok(Err(e)) => {
                    error!(error = %e, "worker failed");
                    first_error.get_or_insert(e);
                }
                Err(join_error) => {
                    error!(error = %join_error, "worker task aborted");
                    first_error.get_or_insert(SortRaceError::task(join_error));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let summary = LaunchSummary {
            workers_started: algorithms.len(),
            workers_completed,
            elapsed_ms: elapsed_millis(start_time.elapsed()),
        };
        info!(?summary, "all sort workers joined");
        Ok(summary)
    }

    /// 設定に従って実行する（必要なら元の配列を先に出力）
    pub async fn run<C>(&self, config: &C) -> SortRaceResult<LaunchSummary>
    where
        C: LaunchConfig,
    {
        let input = config.input();
        if config.show_original() {
            self.emit_original(&input).await?;
        }
        self.launch(&input, &config.algorithms()).await
    }
}

/// ミリ秒に変換する。u64に収まらない場合は飽和させる
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
