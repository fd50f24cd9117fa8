//! Tabular data sources.
//!
//! The detector only needs an indexable, iterable collection of rows with a
//! known column list. [`DataSource`] is that seam; [`Dataset`] is the
//! in-memory implementation used by the CLI (via [`load_csv`]) and tests.

mod loader;

pub use loader::{dataset_from_dataframe, load_csv};

use crate::error::{AutoConfigError, Result};
use crate::types::FieldValue;

/// Read-only view of a single row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [FieldValue],
}

impl<'a> Row<'a> {
    pub fn new(columns: &'a [String], values: &'a [FieldValue]) -> Self {
        Self { columns, values }
    }

    /// Value of a column by name.
    pub fn get(&self, column: &str) -> Option<&'a FieldValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// Values in column order.
    pub fn values(&self) -> &'a [FieldValue] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a FieldValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

/// A collection of rows sharing one canonical column list.
pub trait DataSource {
    /// Column names, in order. Every row carries one value per column.
    fn columns(&self) -> &[String];

    /// Number of rows.
    fn len(&self) -> usize;

    fn row(&self, index: usize) -> Option<Row<'_>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> Box<dyn Iterator<Item = Row<'_>> + '_> {
        Box::new((0..self.len()).filter_map(move |idx| self.row(idx)))
    }
}

/// In-memory, row-major dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl Dataset {
    /// Create an empty dataset with the given column list.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if names.contains(&column) {
                return Err(AutoConfigError::DuplicateColumn(column));
            }
            names.push(column);
        }

        Ok(Self {
            columns: names,
            rows: Vec::new(),
        })
    }

    /// Append a row. It must hold exactly one value per column.
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let values: Vec<FieldValue> = values.into_iter().map(Into::into).collect();
        if values.len() != self.columns.len() {
            return Err(AutoConfigError::RowWidthMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Build a dataset from prepared rows.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<FieldValue>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::new(columns)?;
        dataset.rows.reserve(rows.len());
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }
}

impl DataSource for Dataset {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows
            .get(index)
            .map(|values| Row::new(&self.columns, values))
    }
}
