// 統合テスト用のライター実装
// src/services/output/test_mocks.rs と同じAPIを保つこと

use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// 書き込まれたバイト列を共有バッファに記録するハンドル
#[derive(Clone, Default)]
pub struct CapturedOutput {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    fn push(&self, data: &[u8]) {
        self.bytes.lock().unwrap().extend_from_slice(data);
    }
}

/// 1回のpollで1バイトだけ書き込み、毎回Pendingを挟むライター
///
/// 書き込みの途中で他のタスクに切り替わるため、ロックがなければ出力が混ざる。
pub struct TrickleWriter {
    output: CapturedOutput,
    ready: bool,
}

impl TrickleWriter {
    pub fn new(output: CapturedOutput) -> Self {
        Self {
            output,
            ready: false,
        }
    }
}

impl AsyncWrite for TrickleWriter {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if buf.is_empty() {
            return Poll::Ready(Ok(0));
        }
        if !self.ready {
            self.ready = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        self.ready = false;
        self.output.push(&buf[..1]);
        Poll::Ready(Ok(1))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// 合計`accepted`バイトまで受け付け、その後の書き込みはすべて失敗するライター
pub struct FailingWriter {
    output: CapturedOutput,
    remaining: usize,
}

impl FailingWriter {
    pub fn new(output: CapturedOutput, accepted: usize) -> Self {
        Self {
            output,
            remaining: accepted,
        }
    }
}

impl AsyncWrite for FailingWriter {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if self.remaining == 0 {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "stdout closed",
            )));
        }
        let n = self.remaining.min(buf.len());
        self.remaining -= n;
        self.output.push(&buf[..n]);
        Poll::Ready(Ok(n))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// 合計`accepted`バイトまで受け付け、次の書き込みでパニックするライター
pub struct PanickingWriter {
    output: CapturedOutput,
    remaining: usize,
}

impl PanickingWriter {
    pub fn new(output: CapturedOutput, accepted: usize) -> Self {
        Self {
            output,
            remaining: accepted,
        }
    }
}

impl AsyncWrite for PanickingWriter {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if self.remaining == 0 {
            panic!("writer exploded mid-report");
        }
        let n = self.remaining.min(buf.len());
        self.remaining -= n;
        self.output.push(&buf[..n]);
        Poll::Ready(Ok(n))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// 合計`accepted`バイトまで受け付け、その後は永久にPendingを返すライター
///
/// 書き込み途中の`emit`をキャンセルする状況を作るために使う。
pub struct StallingWriter {
    output: CapturedOutput,
    remaining: usize,
}

impl StallingWriter {
    pub fn new(output: CapturedOutput, accepted: usize) -> Self {
        Self {
            output,
            remaining: accepted,
        }
    }
}

impl AsyncWrite for StallingWriter {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if self.remaining == 0 {
            return Poll::Pending;
        }
        let n = self.remaining.min(buf.len());
        self.remaining -= n;
        self.output.push(&buf[..n]);
        Poll::Ready(Ok(n))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// 期待するテキストレポート
pub fn expected_text(label: &str, values: &[i64]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("Sort: {label}\nResult: {}\n", rendered.join(" "))
}

/// 各レポートがちょうど1回ずつ完全な形で現れ、余計なバイトがないことを確認
pub fn assert_whole_reports(output: &str, expected: &[String]) {
    for report in expected {
        assert_eq!(
            output.matches(report.as_str()).count(),
            1,
            "report not found exactly once:\n{report}\n--- output ---\n{output}"
        );
    }
    let expected_len: usize = expected.iter().map(|r| r.len()).sum();
    assert_eq!(output.len(), expected_len, "unexpected extra output:\n{output}");
}
