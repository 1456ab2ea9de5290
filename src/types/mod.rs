//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `category`: Category and subcategory records
//! - `error`: Error types for the report generator

pub mod category;
pub mod error;

pub use category::{Category, RecordSet, Subcategory};
pub use error::ReportError;
