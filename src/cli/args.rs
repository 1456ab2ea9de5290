use crate::strategy::ParallelConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Render category/subcategory records into text reports and a CSV table
#[derive(Parser, Debug)]
#[command(name = "category-report")]
#[command(
    about = "Render category/subcategory records into text reports and a CSV table",
    long_about = None
)]
pub struct CliArgs {
    /// Input JSON file containing an array of subcategory records
    #[arg(
        long = "input",
        value_name = "PATH",
        default_value = "data.json",
        help = "Path to the input JSON file"
    )]
    pub input_file: PathBuf,

    /// Directory receiving the report files
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the five report files are written to"
    )]
    pub output_dir: PathBuf,

    /// Render strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sequential",
        help = "Render strategy: 'sequential' or 'parallel'"
    )]
    pub strategy: StrategyType,

    /// Maximum number of reports rendered at once (parallel mode only)
    #[arg(
        long = "max-workers",
        value_name = "COUNT",
        help = "Maximum number of reports rendered concurrently (default: CPU cores)"
    )]
    pub max_workers: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Available render strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sequential,
    Parallel,
}

impl CliArgs {
    /// Create a ParallelConfig from CLI arguments
    ///
    /// Falls back to the default worker count when `--max-workers` is absent.
    /// A zero count is replaced by the default with a warning.
    pub fn to_parallel_config(&self) -> ParallelConfig {
        match self.max_workers {
            Some(max_workers) => ParallelConfig::new(max_workers),
            None => ParallelConfig::default(),
        }
    }
}
