//! Core rendering module
//!
//! This module contains the report rendering components:
//! - `traits` - The `Formatter` abstraction shared by every report
//! - `grouping` - Deterministic grouping of records by category name
//! - `formatters` - The four plain-text reports
//! - `report` - Catalogue binding each report to its destination file

pub mod formatters;
pub mod grouping;
pub mod report;
pub mod traits;

pub use formatters::{CompactFlat, CompactGrouped, GroupedVerbose, OriginalVerbose};
pub use grouping::CategoryGroups;
pub use report::ReportKind;
pub use traits::Formatter;
