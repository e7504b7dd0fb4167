// ソート競争のトレイト定義
// ワーカー・シンク・設定の抽象化インターフェースを定義

use super::error::SortRaceResult;
use super::types::{AlgorithmKind, OutputFormat};
use crate::reporting::ReportLine;
use async_trait::async_trait;
use mockall::automock;

/// ソートアルゴリズムの抽象化トレイト
///
/// 入力は値渡しで受け取り、呼び出し側の配列は決して変更しない。
pub trait SortAlgorithm: Send + Sync {
    /// アルゴリズムの種類
    fn kind(&self) -> AlgorithmKind;

    /// レポートに表示するラベル
    fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// 非減少順に並べた配列を返す
    fn sort(&self, input: Vec<i64>) -> Vec<i64>;
}

/// 直列化されたレポート出力先
///
/// 公開される操作は`emit`のみ。1回の`emit`で書かれるレポート行は
/// 他の`emit`と文字単位で混ざらない。
#[automock]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// レポート行を排他的に書き込む
    async fn emit(&self, line: &ReportLine) -> SortRaceResult<()>;
}

#[async_trait]
impl ReportSink for Box<dyn ReportSink> {
    async fn emit(&self, line: &ReportLine) -> SortRaceResult<()> {
        self.as_ref().emit(line).await
    }
}

/// 起動設定を抽象化するトレイト
#[automock]
pub trait LaunchConfig: Send + Sync {
    /// ソート対象の入力配列
    fn input(&self) -> Vec<i64>;

    /// 実行するアルゴリズム（1つにつき1ワーカー）
    fn algorithms(&self) -> Vec<AlgorithmKind>;

    /// レポート行の出力形式
    fn output_format(&self) -> OutputFormat;

    /// ワーカー起動前に元の配列を出力するかどうか
    fn show_original(&self) -> bool;
}
