// Worker - 1アルゴリズムを最初から最後まで実行する並行単位

use crate::{
    algorithms::algorithm_for,
    core::{AlgorithmKind, ReportSink, SortRaceResult, WorkerState},
    reporting::ReportLine,
};
use std::sync::Arc;
use tracing::debug;

/// ワーカーの実行結果（状態遷移の履歴のみ。ソート結果は含まない）
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerOutcome {
    pub worker_id: usize,
    pub kind: AlgorithmKind,
    pub transitions: Vec<WorkerState>,
}

/// 入力のコピー → ソート → 整形 → emit を行う型付きタスク
///
/// シンクには`emit`経由でしかアクセスできない。
pub struct Worker<S> {
    worker_id: usize,
    kind: AlgorithmKind,
    input: Arc<[i64]>,
    sink: Arc<S>,
    state: WorkerState,
    transitions: Vec<WorkerState>,
}

impl<S> Worker<S>
where
    S: ReportSink + 'static,
{
    pub fn new(worker_id: usize, kind: AlgorithmKind, input: Arc<[i64]>, sink: Arc<S>) -> Self {
        Self {
            worker_id,
            kind,
            input,
            sink,
            state: WorkerState::Created,
            transitions: vec![WorkerState::Created],
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    fn advance(&mut self) {
        if let Some(next) = self.state.next() {
            debug!(
                worker_id = self.worker_id,
                algorithm = %self.kind,
                from = ?self.state,
                to = ?next,
                "worker state"
            );
            self.state = next;
            self.transitions.push(next);
        }
    }

    /// ワーカーを最後まで実行する
    ///
    /// ソートはブロッキングプール（実スレッド）上で実行する。
    /// `AwaitingSink`から`WritingSink`を経て`Done`に至るまでが`emit`1回に対応し、
    /// ロック待ちはここでだけ発生する。
    pub async fn run(mut self) -> SortRaceResult<WorkerOutcome> {
        self.execute().await?;

        Ok(WorkerOutcome {
            worker_id: self.worker_id,
            kind: self.kind,
            transitions: self.transitions,
        })
    }

    // 履歴は粗い記録で、`WritingSink`と`Done`は`emit`が成功して戻った時点で記録する。
    // ロック取得の正確な時点はシンク側の`sink acquired`ログに出る。
    // `emit`が失敗した場合は`AwaitingSink`のまま戻る
    async fn execute(&mut self) -> SortRaceResult<()> {
        self.advance(); // Running

        let input = self.input.to_vec();
        let kind = self.kind;
        let sorted =
            tokio::task::spawn_blocking(move || algorithm_for(kind).sort(input)).await?;

        self.advance(); // Formatting
        let line = ReportLine::new(kind.label(), sorted);

        self.advance(); // AwaitingSink
        if let Err(e) = self.sink.emit(&line).await {
            debug!(
                worker_id = self.worker_id,
                algorithm = %self.kind,
                state = ?self.state,
                "emit failed"
            );
            return Err(e);
        }
        self.advance(); // WritingSink
        self.advance(); // Done
        Ok(())
    }
}
