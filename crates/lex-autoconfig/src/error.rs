//! Custom error types for configuration bootstrapping.
//!
//! This module provides the error hierarchy using `thiserror`. Malformed
//! scalar values are deliberately absent from it: a value that does not parse
//! as a number only widens its column's type and is never reported.
//!
//! Errors are serializable so that the CLI can emit a failed run as JSON in
//! place of the report.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for type detection and config generation.
#[derive(Error, Debug)]
pub enum AutoConfigError {
    /// The data source has no rows to seed the column universe from.
    #[error("Dataset is empty: at least one row is required to detect column types")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// The same column name appears twice in the header.
    #[error("Duplicate column '{0}' in dataset header")]
    DuplicateColumn(String),

    /// A row does not carry one value per declared column.
    #[error("Row {row} has {found} values, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A count-column value could not be used as an occurrence weight.
    #[error("Invalid count in column '{column}' at row {row}: '{value}'")]
    InvalidCountValue {
        column: String,
        row: usize,
        value: String,
    },

    /// The weights of the count column sum to zero.
    #[error("Count column '{0}' sums to zero")]
    ZeroTotalWeight(String),

    /// The generator catalog has no entry for the requested kind.
    #[error("Unknown generator type '{0}'")]
    UnknownGenerator(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AutoConfigError>,
    },
}

impl AutoConfigError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AutoConfigError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code, preserved through context wrapping.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::DuplicateColumn(_) => "DUPLICATE_COLUMN",
            Self::RowWidthMismatch { .. } => "ROW_WIDTH_MISMATCH",
            Self::InvalidCountValue { .. } => "INVALID_COUNT_VALUE",
            Self::ZeroTotalWeight(_) => "ZERO_TOTAL_WEIGHT",
            Self::UnknownGenerator(_) => "UNKNOWN_GENERATOR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for AutoConfigError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AutoConfigError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for autoconfig operations.
pub type Result<T> = std::result::Result<T, AutoConfigError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AutoConfigError::Io(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AutoConfigError::Polars(e).with_context(context))
    }
}
