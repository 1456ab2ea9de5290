//! Category Report Library
//! # Overview
//!
//! This library reads a flat list of category/subcategory records from a JSON
//! file and renders the same data as five reports, written to separate files.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Category, Subcategory, ReportError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Rendering logic:
//!   - [`core::grouping`] - Deterministic grouping by category name
//!   - [`core::formatters`] - The plain-text reports
//!   - [`core::report`] - Report catalogue and destination file names
//! - [`io`] - JSON loading, CSV encoding and report file writing
//! - [`strategy`] - Sequential or parallel render-and-write orchestration
//!
//! # Reports
//!
//! - **grouped-verbose** (`grouped_output.txt`): one block per category, sorted by name
//! - **original-verbose** (`original_output.txt`): one numbered block per record
//! - **csv** (`output.csv`): ids and names of every record
//! - **compact-flat** (`raw_output.txt`): single line, one part per record
//! - **compact-grouped** (`grouped_output_compact.txt`): single line, one part per category
//!
//! Categories are grouped by name, so categories sharing a name but not an id
//! are merged into one group.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{CategoryGroups, Formatter, ReportKind};
pub use io::{load_records, write_output};
pub use types::{Category, RecordSet, ReportError, Subcategory};
