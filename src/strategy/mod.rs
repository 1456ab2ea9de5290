//! Render strategy module
//!
//! This module defines the Strategy pattern for the render-and-write stage of
//! the pipeline. Every strategy produces the same five files with the same
//! bytes; they differ only in how the work is scheduled.

use crate::cli::StrategyType;
use crate::core::ReportKind;
use crate::io::write_output;
use crate::types::{ReportError, Subcategory};
use std::path::{Path, PathBuf};

pub mod parallel;
pub mod sync;

pub use parallel::{ParallelConfig, ParallelRenderStrategy};
pub use sync::SequentialRenderStrategy;

/// Render strategy trait for the render-and-write stage
pub trait RenderStrategy: Send + Sync {
    /// Render every report in [`ReportKind::ALL`] and write it under `output_dir`
    ///
    /// # Arguments
    ///
    /// * `records` - The loaded record set, never modified
    /// * `output_dir` - Directory receiving the report files
    ///
    /// # Returns
    ///
    /// * `Ok(paths)` - Paths of the written files, in [`ReportKind::ALL`] order
    /// * `Err(ReportError)` - The first failure; the run must be aborted
    fn render_all(
        &self,
        records: &[Subcategory],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, ReportError>;
}

/// Render a single report and write it to its file under `output_dir`
pub fn render_report(
    kind: ReportKind,
    records: &[Subcategory],
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(kind.file_name());
    let contents = kind.render(records)?;
    write_output(&path, contents.as_bytes())?;

    tracing::info!(report = %kind, path = %path.display(), "report written");
    Ok(path)
}

/// Create a render strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of render strategy to create
/// * `config` - Optional worker configuration (ignored for sequential)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ParallelConfig>,
) -> Box<dyn RenderStrategy> {
    match strategy_type {
        StrategyType::Sequential => Box::new(SequentialRenderStrategy),
        StrategyType::Parallel => {
            let config = config.unwrap_or_default();
            Box::new(ParallelRenderStrategy::new(config))
        }
    }
}
