//! Sequential render strategy
//!
//! Renders and writes the reports one after another on the calling thread,
//! in [`ReportKind::ALL`] order. This is the reference behavior.
//!
//! # Error Handling
//!
//! The first failing report stops the run. Files written before the failure
//! are left in place.

use crate::core::ReportKind;
use crate::strategy::{render_report, RenderStrategy};
use crate::types::{ReportError, Subcategory};
use std::path::{Path, PathBuf};

/// Sequential render strategy
///
/// # Examples
///
/// ```no_run
/// use category_report::io::load_records;
/// use category_report::strategy::{RenderStrategy, SequentialRenderStrategy};
/// use std::path::Path;
///
/// let records = load_records(Path::new("data.json")).unwrap();
/// let written = SequentialRenderStrategy
///     .render_all(&records, Path::new("."))
///     .expect("Rendering failed");
/// println!("{} files written", written.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SequentialRenderStrategy;

impl RenderStrategy for SequentialRenderStrategy {
    fn render_all(
        &self,
        records: &[Subcategory],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, ReportError> {
        ReportKind::ALL
            .iter()
            .map(|&kind| render_report(kind, records, output_dir))
            .collect()
    }
}
