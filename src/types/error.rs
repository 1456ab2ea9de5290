//! Error types for the category report generator
//!
//! Every failure in the pipeline is fatal. Each variant names the step that
//! failed so the driver can print a single diagnostic and exit non-zero.
//!
//! # Error Categories
//!
//! - **Input Errors**: the input file cannot be opened, read, or decoded
//! - **Output Errors**: a report file cannot be created or written
//! - **Rendering Errors**: CSV encoding or a parallel worker failed

use thiserror::Error;

/// Main error type for the report generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Input file could not be opened (missing, permission denied, ...)
    #[error("Failed to open input file '{path}': {message}")]
    InputOpen {
        /// The input path
        path: String,
        /// Underlying cause
        message: String,
    },

    /// Input file was opened but could not be read to the end
    #[error("Failed to read input file '{path}': {message}")]
    InputRead {
        /// The input path
        path: String,
        /// Underlying cause
        message: String,
    },

    /// Input bytes do not decode into an array of subcategory objects
    #[error("Failed to decode JSON at line {line}, column {column}: {message}")]
    Decode {
        /// 1-based line reported by the decoder
        line: usize,
        /// 1-based column reported by the decoder
        column: usize,
        /// Description of the decoding error
        message: String,
    },

    /// Output file could not be created or truncated
    #[error("Failed to create output file '{path}': {message}")]
    OutputCreate {
        /// The destination path
        path: String,
        /// Underlying cause
        message: String,
    },

    /// Output file was created but writing its contents failed
    #[error("Failed to write to output file '{path}': {message}")]
    OutputWrite {
        /// The destination path
        path: String,
        /// Underlying cause
        message: String,
    },

    /// CSV table could not be encoded
    #[error("Failed to encode CSV: {message}")]
    CsvEncode {
        /// Description of the encoding error
        message: String,
    },

    /// A parallel rendering task panicked or was cancelled
    #[error("Render worker failed: {message}")]
    Worker {
        /// Description of the failure
        message: String,
    },
}

// Conversion from serde_json::Error to ReportError
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Decode {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReportError
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::CsvEncode {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InputOpen error
    pub fn input_open(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::InputOpen {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InputRead error
    pub fn input_read(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::InputRead {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputCreate error
    pub fn output_create(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::OutputCreate {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputWrite error
    pub fn output_write(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::OutputWrite {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Worker error
    pub fn worker(error: impl std::fmt::Display) -> Self {
        ReportError::Worker {
            message: error.to_string(),
        }
    }
}
