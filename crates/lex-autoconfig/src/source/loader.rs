//! CSV loading through Polars.

use super::Dataset;
use crate::error::{AutoConfigError, Result, ResultExt};
use crate::types::FieldValue;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load a delimited file with a header row into a [`Dataset`].
///
/// Column types are inferred from the first 100 rows. If that parse fails
/// (e.g. a column turns out to be mixed further down), the file is read
/// again with every column as a string, leaving typing to the detector.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AutoConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "input file not found",
        ))
        .with_context(format!("Failed to open {}", path.display())));
    }

    let df = match read_frame(path, Some(100)) {
        Ok(df) => df,
        Err(e) => {
            warn!("Typed CSV parse failed, retrying with string columns: {}", e);
            read_frame(path, Some(0)).context(format!("Failed to read {}", path.display()))?
        }
    };

    debug!("Loaded frame with shape {:?}", df.shape());
    dataset_from_dataframe(&df)
}

fn read_frame(path: &Path, infer_schema_length: Option<usize>) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
}

/// Convert a Polars frame into raw [`FieldValue`] rows.
pub fn dataset_from_dataframe(df: &DataFrame) -> Result<Dataset> {
    let height = df.height();
    let mut names = Vec::with_capacity(df.width());
    let mut rows: Vec<Vec<FieldValue>> = (0..height)
        .map(|_| Vec::with_capacity(df.width()))
        .collect();

    for column in df.get_columns() {
        names.push(column.name().to_string());
        let series = column.as_materialized_series();
        let values = series_values(series)?;
        for (row, value) in rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    Dataset::from_rows(names, rows)
}

fn series_values(series: &Series) -> Result<Vec<FieldValue>> {
    let dtype = series.dtype();

    let values = if dtype.is_integer() {
        let cast = series.cast(&DataType::Int64)?;
        cast.i64()?.into_iter().map(FieldValue::from).collect()
    } else if dtype.is_float() {
        let cast = series.cast(&DataType::Float64)?;
        cast.f64()?.into_iter().map(FieldValue::from).collect()
    } else if dtype == &DataType::String {
        series.str()?.into_iter().map(FieldValue::from).collect()
    } else if dtype == &DataType::Boolean {
        series
            .bool()?
            .into_iter()
            .map(|v| match v {
                Some(true) => FieldValue::from("True"),
                Some(false) => FieldValue::from("False"),
                None => FieldValue::Null,
            })
            .collect()
    } else {
        let mut values = Vec::with_capacity(series.len());
        for idx in 0..series.len() {
            let value = series.get(idx)?;
            values.push(if value.is_null() {
                FieldValue::Null
            } else {
                FieldValue::Str(format!("{}", value))
            });
        }
        values
    };

    Ok(values)
}
