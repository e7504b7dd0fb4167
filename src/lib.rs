pub mod algorithms;
pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;
pub mod reporting;
pub mod services;

pub use crate::core::{
    AlgorithmKind, LaunchConfig, LaunchSummary, OutputFormat, ReportSink, SortAlgorithm,
    SortRaceError, SortRaceResult,
};
pub use engine::Launcher;
pub use reporting::ReportLine;
pub use services::{ConsoleSink, DefaultLaunchConfig, SynchronizedSink};
