// 同期化されたレポート出力の具象実装

use crate::core::{OutputFormat, ReportSink, SortRaceError, SortRaceResult};
use crate::reporting::ReportLine;
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// ロックで保護される書き込み先と、途中で中断された書き込みの有無
struct SinkState<W> {
    writer: W,
    interrupted: bool,
}

/// 1つのロックで書き込みを直列化する出力シンク
///
/// ロック中に1件のレポート行全体を書き込みフラッシュする。ロックはガードの
/// ドロップで解放されるため、書き込み失敗やタスクのパニック・中断でも必ず解放される。
/// tokioのMutexはFIFOで待機者を起こす。
///
/// 書き込みが完了せずに終わった場合（エラー・パニック・キャンセル）、出力には
/// 行の断片が残る。その後の行が断片に連結されないよう、以降の`emit`は何も書かずに
/// `SinkError`を返す。
pub struct SynchronizedSink<W> {
    state: Mutex<SinkState<W>>,
    format: OutputFormat,
}

/// 標準出力へのシンク
pub type ConsoleSink = SynchronizedSink<tokio::io::Stdout>;

impl<W> SynchronizedSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            state: Mutex::new(SinkState {
                writer,
                interrupted: false,
            }),
            format,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 以前の書き込みが中断され、シンクが閉じているかどうか
    pub async fn is_closed(&self) -> bool {
        self.state.lock().await.interrupted
    }

    /// 内部のライターを取り出す
    pub fn into_inner(self) -> W {
        self.state.into_inner().writer
    }
}

impl ConsoleSink {
    pub fn console(format: OutputFormat) -> Self {
        Self::new(tokio::io::stdout(), format)
    }
}

#[async_trait]
impl<W> ReportSink for SynchronizedSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn emit(&self, line: &ReportLine) -> SortRaceResult<()> {
        let rendered = line.render(self.format);

        let mut state = self.state.lock().await;
        if state.interrupted {
            warn!(label = line.label(), "sink closed by an earlier interrupted write");
            return Err(SortRaceError::sink(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "以前の書き込みが中断されたため出力シンクは閉じています",
            )));
        }
        debug!(label = line.label(), bytes = rendered.len(), "sink acquired");

        // 書き込み完了までは中断扱い。エラー・パニック・キャンセルではこのまま残る
        state.interrupted = true;
        state
            .writer
            .write_all(rendered.as_bytes())
            .await
            .map_err(SortRaceError::sink)?;
        state.writer.flush().await.map_err(SortRaceError::sink)?;
        state.interrupted = false;

        debug!(label = line.label(), "sink released");
        Ok(())
    }
}
