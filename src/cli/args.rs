use crate::core::{AlgorithmKind, OutputFormat, SortRaceResult};
use crate::services::{parse_input, DefaultLaunchConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sort_race")]
#[command(about = "Sorts one integer sequence with several algorithms on parallel threads")]
#[command(version)]
pub struct Cli {
    /// Comma-separated integers to sort (defaults to 4,1,3,2,8,5,1,9,7)
    #[arg(short, long, allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Algorithm to run; repeat to select several (defaults to all three)
    #[arg(short, long = "algorithm", value_enum)]
    pub algorithms: Vec<AlgorithmKind>,

    /// Print the original sequence before launching the workers
    #[arg(long)]
    pub show_original: bool,

    /// Rendering of each report line
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// CLI引数から起動設定を組み立てる
    pub fn to_config(&self) -> SortRaceResult<DefaultLaunchConfig> {
        let mut config = DefaultLaunchConfig::default()
            .with_output_format(self.format)
            .with_show_original(self.show_original);

        if let Some(raw) = &self.input {
            config = config.with_input(parse_input(raw)?);
        }
        if !self.algorithms.is_empty() {
            config = config.with_algorithms(self.algorithms.clone());
        }

        Ok(config)
    }
}
