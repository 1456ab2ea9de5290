//! Core traits for report rendering
//!
//! Every report is produced by a [`Formatter`], so the render strategies can
//! treat text reports and the CSV table the same way.

use crate::types::{ReportError, Subcategory};

/// Trait for turning the record set into one complete report
///
/// Implementations are pure: they never mutate the records and never touch
/// the filesystem. Each call builds its own output from scratch.
pub trait Formatter: Send + Sync {
    /// Render the records into a single text blob
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError>;
}
