//! CSV format handling for the record table
//!
//! One header row followed by one row per subcategory, in input order.
//! Quoting and escaping of embedded delimiters, quotes and newlines is
//! left to `csv::Writer`.
//!
//! All functions are pure (no filesystem I/O) for easy testing.

use crate::core::traits::Formatter;
use crate::types::{ReportError, Subcategory};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// Column names of the CSV table
pub const CSV_HEADER: [&str; 4] = [
    "Main Category ID",
    "Main Category Name",
    "Subcategory ID",
    "Subcategory Name",
];

/// CSV row structure for serialization
///
/// Flattens a subcategory and its embedded category into the four columns
/// of [`CSV_HEADER`].
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CsvRow<'a> {
    pub category_id: &'a str,
    pub category_name: &'a str,
    pub subcategory_id: &'a str,
    pub subcategory_name: &'a str,
}

impl<'a> From<&'a Subcategory> for CsvRow<'a> {
    fn from(record: &'a Subcategory) -> Self {
        CsvRow {
            category_id: &record.category.id,
            category_name: &record.category.name,
            subcategory_id: &record.id,
            subcategory_name: &record.name,
        }
    }
}

/// Write the record table in CSV format
///
/// The header is written explicitly so that an empty record set still
/// produces a header-only table.
///
/// # Arguments
///
/// * `records` - Records to write, in the order they should appear
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_records_csv(
    records: &[Subcategory],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }

    writer.flush().map_err(|e| ReportError::CsvEncode {
        message: format!("Failed to flush CSV output: {}", e),
    })?;

    Ok(())
}

/// Formatter producing the CSV table as a string
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTable;

impl Formatter for CsvTable {
    fn render(&self, records: &[Subcategory]) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        write_records_csv(records, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| ReportError::CsvEncode {
            message: e.to_string(),
        })
    }
}
