use anyhow::Result;
use clap::Parser;
use sort_race::{
    cli::{execute, Cli},
    logging::init_logging,
    SortRaceError,
};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli).await {
        Ok(_summary) => Ok(()),
        Err(error) => {
            debug!(
                error = %error,
                severity = error.severity().as_str(),
                fatal = error.is_fatal(),
                "sort race aborted"
            );
            eprintln!("❌ エラー: {error}");
            let code = match error {
                SortRaceError::ConfigurationError { .. } => 2,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}
