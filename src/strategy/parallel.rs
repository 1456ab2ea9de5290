//! Parallel render strategy
//!
//! Each report is rendered and written on its own task in the blocking pool
//! of a tokio multi-threaded runtime. The record set is shared read-only
//! behind an `Arc`; every task writes a different file, so no coordination
//! between tasks is needed.
//!
//! ```text
//! ParallelRenderStrategy
//!     ├── ParallelConfig (max_workers)
//!     └── tokio runtime
//!         └── spawn_blocking × 5 (render + write one report each)
//! ```
//!
//! Output bytes are identical to [`super::SequentialRenderStrategy`]; only
//! the order in which files appear on disk differs.

use crate::core::ReportKind;
use crate::strategy::{render_report, RenderStrategy};
use crate::types::{ReportError, Subcategory};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Builder;
use tracing::{debug, warn};

/// Configuration for parallel rendering
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Maximum number of reports rendered at the same time
    pub max_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Create a new ParallelConfig, falling back to the default for zero
    pub fn new(max_workers: usize) -> Self {
        let default = Self::default();

        let max_workers = if max_workers == 0 {
            warn!(
                requested = max_workers,
                fallback = default.max_workers,
                "invalid max_workers, using default"
            );
            default.max_workers
        } else {
            max_workers
        };

        Self { max_workers }
    }
}

/// Parallel render strategy
#[derive(Debug, Clone)]
pub struct ParallelRenderStrategy {
    config: ParallelConfig,
}

impl ParallelRenderStrategy {
    /// Create a new ParallelRenderStrategy with the specified configuration
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }
}

impl RenderStrategy for ParallelRenderStrategy {
    fn render_all(
        &self,
        records: &[Subcategory],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, ReportError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(self.config.max_workers.max(1))
            .thread_name("report-render")
            .build()
            .map_err(ReportError::worker)?;

        debug!(
            max_workers = self.config.max_workers,
            reports = ReportKind::ALL.len(),
            "rendering reports in parallel"
        );

        let records: Arc<[Subcategory]> = Arc::from(records);

        runtime.block_on(async {
            let tasks = ReportKind::ALL.iter().map(|&kind| {
                let records = Arc::clone(&records);
                let output_dir = output_dir.to_path_buf();
                tokio::task::spawn_blocking(move || render_report(kind, &records, &output_dir))
            });

            // join_all keeps task order, so paths come back in ReportKind::ALL order
            join_all(tasks)
                .await
                .into_iter()
                .map(|joined| joined.map_err(ReportError::worker).and_then(|result| result))
                .collect::<Result<Vec<PathBuf>, ReportError>>()
        })
    }
}
