//! I/O module
//!
//! Handles JSON input, CSV encoding and report files.
//!
//! # Components
//!
//! - `json_loader` - Reads and decodes the input record set
//! - `csv_format` - CSV table rendering
//! - `writer` - Truncate-and-replace report file writer

pub mod csv_format;
pub mod json_loader;
pub mod writer;

pub use csv_format::{write_records_csv, CsvTable, CSV_HEADER};
pub use json_loader::{decode_records, load_records};
pub use writer::write_output;
