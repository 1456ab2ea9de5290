//! Text report formatters
//!
//! Four plain-text renderings of the record set. The CSV table lives in
//! [`crate::io::csv_format`] because it delegates to the `csv` crate.
//!
//! | Formatter | Ordering |
//! |---|---|
//! | [`GroupedVerbose`] | categories by name, members in input order |
//! | [`OriginalVerbose`] | input order |
//! | [`CompactFlat`] | input order |
//! | [`CompactGrouped`] | categories by name, members in input order |
//!
//! An empty record set renders as the empty string for all four.

use crate::core::grouping::CategoryGroups;
use crate::core::traits::Formatter;
use crate::types::{ReportError, Subcategory};
use std::fmt::Write;

/// Separator between parts of the single-line reports
const COMPACT_SEPARATOR: &str = ", ";

/// One block per category, listing its subcategories and a per-group total
///
/// ```text
/// 1. Main Category: Fruit
/// Subcategories:
/// - Apples
///
///  Total Subcategories: 1
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedVerbose;

impl Formatter for GroupedVerbose {
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError> {
        let groups = CategoryGroups::build(records);
        let mut output = String::new();

        for (i, (name, members)) in groups.iter().enumerate() {
            // Writing into a String cannot fail
            let _ = write!(output, "{}. Main Category: {}\nSubcategories:\n", i + 1, name);
            for member in members {
                let _ = writeln!(output, "- {}", member.name);
            }
            let _ = write!(output, "\n Total Subcategories: {}\n\n", members.len());
        }

        Ok(output)
    }
}

/// One block per record, numbered by input position
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginalVerbose;

impl Formatter for OriginalVerbose {
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError> {
        let mut output = String::new();

        for (i, record) in records.iter().enumerate() {
            let _ = write!(
                output,
                "Category #{}\nMain Category: {}\nSubcategory: {}\n\n",
                i + 1,
                record.category.name,
                record.name
            );
        }

        Ok(output)
    }
}

/// Single line, one part per record in input order
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactFlat;

impl Formatter for CompactFlat {
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError> {
        let parts: Vec<String> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                format!(
                    "main category #{}: {} subcategory: {}",
                    i + 1,
                    record.category.name,
                    record.name
                )
            })
            .collect();

        Ok(parts.join(COMPACT_SEPARATOR))
    }
}

/// Single line, one part per category ranked by name
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactGrouped;

impl Formatter for CompactGrouped {
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError> {
        let groups = CategoryGroups::build(records);

        let parts: Vec<String> = groups
            .iter()
            .enumerate()
            .map(|(k, (name, members))| {
                let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
                format!(
                    "main category #{}: {} subcategories: {}",
                    k + 1,
                    name,
                    names.join(COMPACT_SEPARATOR)
                )
            })
            .collect();

        Ok(parts.join(COMPACT_SEPARATOR))
    }
}
