// 起動設定の具象実装

use crate::core::{
    AlgorithmKind, LaunchConfig, OutputFormat, SortRaceError, SortRaceResult, DEFAULT_INPUT,
};

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultLaunchConfig {
    input: Vec<i64>,
    algorithms: Vec<AlgorithmKind>,
    output_format: OutputFormat,
    show_original: bool,
}

impl DefaultLaunchConfig {
    pub fn new(input: Vec<i64>) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn with_input(mut self, input: Vec<i64>) -> Self {
        self.input = input;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_show_original(mut self, show_original: bool) -> Self {
        self.show_original = show_original;
        self
    }
}

impl Default for DefaultLaunchConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_vec(),
            algorithms: AlgorithmKind::ALL.to_vec(),
            output_format: OutputFormat::Text,
            show_original: false,
        }
    }
}

impl LaunchConfig for DefaultLaunchConfig {
    fn input(&self) -> Vec<i64> {
        self.input.clone()
    }

    fn algorithms(&self) -> Vec<AlgorithmKind> {
        self.algorithms.clone()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn show_original(&self) -> bool {
        self.show_original
    }
}

/// カンマ区切りの整数列を解析する
///
/// 空文字列（空白のみを含む）は空の入力として扱う。
pub fn parse_input(raw: &str) -> SortRaceResult<Vec<i64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|e| {
                SortRaceError::configuration(format!("整数として解釈できない値 '{token}': {e}"))
            })
        })
        .collect()
}
