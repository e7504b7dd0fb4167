// レポート整形
// アルゴリズム名とソート結果からレポート行を組み立てる

pub mod report_line;

// 公開API
pub use report_line::ReportLine;
