//! Report catalogue
//!
//! Binds each formatter to the file it is written to. The render strategies
//! iterate [`ReportKind::ALL`] and never name a formatter directly.

use crate::core::formatters::{CompactFlat, CompactGrouped, GroupedVerbose, OriginalVerbose};
use crate::core::traits::Formatter;
use crate::io::csv_format::CsvTable;
use crate::types::{ReportError, Subcategory};
use std::fmt;

/// The five reports produced from one record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Blocks per category with a per-group total
    GroupedVerbose,
    /// One numbered block per record
    OriginalVerbose,
    /// CSV table of ids and names
    Csv,
    /// Single line, one part per record
    CompactFlat,
    /// Single line, one part per category
    CompactGrouped,
}

impl ReportKind {
    /// Every report, in the order they are written
    pub const ALL: [ReportKind; 5] = [
        ReportKind::GroupedVerbose,
        ReportKind::OriginalVerbose,
        ReportKind::Csv,
        ReportKind::CompactFlat,
        ReportKind::CompactGrouped,
    ];

    /// Destination file name, relative to the output directory
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::GroupedVerbose => "grouped_output.txt",
            ReportKind::OriginalVerbose => "original_output.txt",
            ReportKind::Csv => "output.csv",
            ReportKind::CompactFlat => "raw_output.txt",
            ReportKind::CompactGrouped => "grouped_output_compact.txt",
        }
    }

    /// Formatter that renders this report
    pub fn formatter(self) -> &'static dyn Formatter {
        match self {
            ReportKind::GroupedVerbose => &GroupedVerbose,
            ReportKind::OriginalVerbose => &OriginalVerbose,
            ReportKind::Csv => &CsvTable,
            ReportKind::CompactFlat => &CompactFlat,
            ReportKind::CompactGrouped => &CompactGrouped,
        }
    }

    /// Render this report from the record set
    pub fn render(self, records: &[Subcategory]) -> Result<String, ReportError> {
        self.formatter().render(records)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::GroupedVerbose => "grouped-verbose",
            ReportKind::OriginalVerbose => "original-verbose",
            ReportKind::Csv => "csv",
            ReportKind::CompactFlat => "compact-flat",
            ReportKind::CompactGrouped => "compact-grouped",
        };
        f.write_str(name)
    }
}
