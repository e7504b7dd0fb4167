// レポート行の整形
// 純粋な整形処理のみ。副作用も失敗もない

use crate::core::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// アルゴリズム名とソート結果からなる1件のレポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    #[serde(rename = "sort")]
    label: String,
    #[serde(rename = "result")]
    values: Vec<i64>,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// `Sort: <label>\nResult: <v1> <v2> ...\n`形式
    ///
    /// 空の配列では`Result: `の後にそのまま改行が続く。
    pub fn to_text(&self) -> String {
        let mut text = format!("Sort: {}\nResult: ", self.label);
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            // Stringへの書き込みは失敗しない
            let _ = write!(text, "{value}");
        }
        text.push('\n');
        text
    }

    /// `{"sort":"<label>","result":[...]}`形式の1行（末尾改行付き）
    pub fn to_json(&self) -> String {
        // 文字列と整数列だけの構造体なのでシリアライズは失敗しない
        let mut json = serde_json::to_string(self).unwrap_or_default();
        json.push('\n');
        json
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// JSON形式の1行からレポートを復元
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line.trim_end())
    }
}
