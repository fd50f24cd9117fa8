//! Column type detection.
//!
//! Classifies every column of a [`DataSource`] as `int`, `float`,
//! `multinomial` or `text`:
//! - a first pass widens each column's raw type from the values it holds
//!   (`int` → `float` → `str`, never narrowing) and sums the row weights
//! - a second pass estimates cardinality, growing each column's distinct-value
//!   set only until it is clearly above the multinomial threshold
//! - columns whose distinct ratio stays below the threshold become
//!   `multinomial` whatever their raw type; remaining string columns become `text`

mod probe;

pub use probe::probe_value;

use crate::config::DetectorConfig;
use crate::error::{AutoConfigError, Result};
use crate::source::DataSource;
use crate::types::{ColumnTypeMap, FieldType, FieldValue, ValueKind};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Detect column types with the default threshold.
pub fn detect<S: DataSource + ?Sized>(
    source: &S,
    count_column: Option<&str>,
) -> Result<ColumnTypeMap> {
    let config = DetectorConfig {
        count_column: count_column.map(str::to_string),
        ..DetectorConfig::default()
    };
    TypeDetector::with_config(config)?.detect(source)
}

/// Cardinality figures gathered for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Distinct non-null values recorded before the set stopped growing.
    pub distinct_seen: usize,
    /// `distinct_seen` divided by the total weight.
    pub ratio: f64,
    /// Whether the distinct set stopped growing early.
    pub capped: bool,
}

/// Full detector output.
#[derive(Debug, Clone)]
pub struct Detection {
    pub types: ColumnTypeMap,
    pub stats: Vec<ColumnStats>,
    pub row_count: usize,
    /// Row count, or the sum of the count column when one is set.
    pub total_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawType {
    Int,
    Float,
    Str,
}

impl RawType {
    fn widen(self, kind: ValueKind) -> Self {
        match (self, kind) {
            (_, ValueKind::Str) => RawType::Str,
            (RawType::Int, ValueKind::Float) => RawType::Float,
            (current, _) => current,
        }
    }
}

/// Infers semantic column types from raw values.
#[derive(Debug, Clone, Default)]
pub struct TypeDetector {
    config: DetectorConfig,
}

impl TypeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a validated configuration.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn detect<S: DataSource + ?Sized>(&self, source: &S) -> Result<ColumnTypeMap> {
        Ok(self.detect_with_stats(source)?.types)
    }

    pub fn detect_with_stats<S: DataSource + ?Sized>(&self, source: &S) -> Result<Detection> {
        if source.is_empty() {
            return Err(AutoConfigError::EmptyDataset);
        }

        let columns = source.columns();
        let weight_index = match self.config.count_column.as_deref() {
            Some(name) => Some(
                columns
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| AutoConfigError::ColumnNotFound(name.to_string()))?,
            ),
            None => None,
        };

        info!(
            "Scanning {} rows across {} columns",
            source.len(),
            columns.len()
        );

        let (raw_types, total) = self.scan_types(source, weight_index)?;
        debug!("Type pass complete, total weight {}", total);

        let threshold = self.config.multinomial_threshold;
        let (distinct, capped) = scan_cardinality(source, total, threshold);
        debug!("Cardinality pass complete");

        let mut types = ColumnTypeMap::new();
        let mut stats = Vec::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            let ratio = distinct[idx] as f64 / total;
            let field_type = if ratio < threshold {
                FieldType::Multinomial
            } else {
                match raw_types[idx] {
                    RawType::Int => FieldType::Int,
                    RawType::Float => FieldType::Float,
                    RawType::Str => FieldType::Text,
                }
            };
            debug!(column = %column, %field_type, ratio, "Classified column");

            types.insert(column.clone(), field_type);
            stats.push(ColumnStats {
                column: column.clone(),
                distinct_seen: distinct[idx],
                ratio,
                capped: capped[idx],
            });
        }

        Ok(Detection {
            types,
            stats,
            row_count: source.len(),
            total_weight: total,
        })
    }

    fn scan_types<S: DataSource + ?Sized>(
        &self,
        source: &S,
        weight_index: Option<usize>,
    ) -> Result<(Vec<RawType>, f64)> {
        let mut raw_types = vec![RawType::Int; source.columns().len()];
        let mut total = 0.0;

        for (row_idx, row) in source.rows().enumerate() {
            if let Some(idx) = weight_index {
                total += self.row_weight(row_idx, &row.values()[idx])?;
            }
            for (raw, value) in raw_types.iter_mut().zip(row.values()) {
                *raw = raw.widen(probe_value(value));
            }
        }

        if weight_index.is_none() {
            return Ok((raw_types, source.len() as f64));
        }
        if total <= 0.0 {
            return Err(AutoConfigError::ZeroTotalWeight(
                self.config.count_column.clone().unwrap_or_default(),
            ));
        }
        Ok((raw_types, total))
    }

    fn row_weight(&self, row: usize, value: &FieldValue) -> Result<f64> {
        let weight = match value {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Str(s) => s.trim().parse::<f64>().ok(),
            FieldValue::Null => None,
        };

        match weight {
            Some(w) if w.is_finite() && w >= 0.0 => Ok(w),
            _ => Err(AutoConfigError::InvalidCountValue {
                column: self.config.count_column.clone().unwrap_or_default(),
                row,
                value: value.to_string(),
            }),
        }
    }
}

/// Count distinct non-null values per column.
///
/// A column's set only grows while `(len - 1) / total < threshold`. Once a
/// column is past that point its final ratio can no longer fall under the
/// threshold, so the exact count no longer matters.
fn scan_cardinality<S: DataSource + ?Sized>(
    source: &S,
    total: f64,
    threshold: f64,
) -> (Vec<usize>, Vec<bool>) {
    let width = source.columns().len();
    let mut seen: Vec<HashSet<String>> = vec![HashSet::new(); width];
    let mut capped = vec![false; width];

    for row in source.rows() {
        for (idx, value) in row.values().iter().enumerate() {
            if value.is_null() {
                continue;
            }
            let set = &mut seen[idx];
            if (set.len() as f64 - 1.0) / total < threshold {
                set.insert(value.to_string());
            } else {
                capped[idx] = true;
            }
        }
    }

    (seen.iter().map(HashSet::len).collect(), capped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Dataset;

    fn dataset(columns: &[&str], rows: Vec<Vec<FieldValue>>) -> Dataset {
        Dataset::from_rows(columns.iter().copied(), rows).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<FieldValue> {
        values.iter().map(|v| FieldValue::from(*v)).collect()
    }

    #[test]
    fn test_empty_dataset_fails() {
        let ds = Dataset::new(["a"]).unwrap();
        let err = detect(&ds, None).unwrap_err();
        assert!(matches!(err, AutoConfigError::EmptyDataset));
    }

    #[test]
    fn test_unique_integers_stay_int() {
        let rows = (0..20).map(|i| strings(&[i.to_string().as_str()])).collect();
        let types = detect(&dataset(&["id"], rows), None).unwrap();
        assert_eq!(types.get("id"), Some(FieldType::Int));
    }

    #[test]
    fn test_single_fractional_value_makes_float() {
        let mut rows: Vec<_> = (0..20).map(|i| strings(&[i.to_string().as_str()])).collect();
        rows.push(strings(&["2.5"]));
        let types = detect(&dataset(&["x"], rows), None).unwrap();
        assert_eq!(types.get("x"), Some(FieldType::Float));
    }

    #[test]
    fn test_string_value_forces_text_and_never_reverts() {
        let mut rows: Vec<_> = vec![strings(&["oops"])];
        rows.extend((0..20).map(|i| strings(&[format!("{}.5", i).as_str()])));
        let types = detect(&dataset(&["x"], rows), None).unwrap();
        assert_eq!(types.get("x"), Some(FieldType::Text));
    }

    #[test]
    fn test_nulls_do_not_affect_type() {
        let mut rows: Vec<_> = (0..20).map(|i| vec![FieldValue::Int(i)]).collect();
        rows.push(vec![FieldValue::Null]);
        let types = detect(&dataset(&["n"], rows), None).unwrap();
        assert_eq!(types.get("n"), Some(FieldType::Int));
    }

    #[test]
    fn test_low_cardinality_numeric_becomes_multinomial() {
        let rows = (0..100).map(|i| vec![FieldValue::Int(i % 3)]).collect();
        let types = detect(&dataset(&["bucket"], rows), None).unwrap();
        assert_eq!(types.get("bucket"), Some(FieldType::Multinomial));
    }

    #[test]
    fn test_ratio_exactly_at_threshold_is_not_multinomial() {
        // 10 distinct values over 100 rows: 0.1 is not < 0.1
        let rows = (0..100).map(|i| strings(&[format!("v{}", i % 10).as_str()])).collect();
        let detection = TypeDetector::new()
            .detect_with_stats(&dataset(&["tag"], rows))
            .unwrap();
        assert_eq!(detection.types.get("tag"), Some(FieldType::Text));
        assert_eq!(detection.stats[0].distinct_seen, 10);
    }

    #[test]
    fn test_distinct_set_stops_growing() {
        let rows = (0..100).map(|i| vec![FieldValue::Int(i)]).collect();
        let detection = TypeDetector::new()
            .detect_with_stats(&dataset(&["id"], rows))
            .unwrap();
        let stats = &detection.stats[0];
        // grows while (len - 1) / 100 < 0.1, i.e. up to 11 entries
        assert_eq!(stats.distinct_seen, 11);
        assert!(stats.capped);
        assert_eq!(detection.types.get("id"), Some(FieldType::Int));
    }

    #[test]
    fn test_weighted_total_is_used_as_denominator() {
        // 50 rows, 40 distinct codes, weights summing to 1000
        let rows = (0..50)
            .map(|i| {
                vec![
                    FieldValue::from(format!("code-{}", i % 40)),
                    FieldValue::Int(20),
                ]
            })
            .collect();
        let ds = dataset(&["code", "count"], rows);

        let weighted = detect(&ds, Some("count")).unwrap();
        assert_eq!(weighted.get("code"), Some(FieldType::Multinomial));

        let unweighted = detect(&ds, None).unwrap();
        assert_eq!(unweighted.get("code"), Some(FieldType::Text));
    }

    #[test]
    fn test_missing_count_column() {
        let ds = dataset(&["a"], vec![strings(&["x"])]);
        let err = detect(&ds, Some("hits")).unwrap_err();
        assert!(matches!(err, AutoConfigError::ColumnNotFound(ref c) if c == "hits"));
    }

    #[test]
    fn test_invalid_count_value() {
        let ds = dataset(
            &["a", "n"],
            vec![strings(&["x", "3"]), strings(&["y", "many"])],
        );
        let err = detect(&ds, Some("n")).unwrap_err();
        assert!(matches!(
            err,
            AutoConfigError::InvalidCountValue { row: 1, ref value, .. } if value == "many"
        ));
    }

    #[test]
    fn test_zero_total_weight() {
        let ds = dataset(&["a", "n"], vec![strings(&["x", "0"]), strings(&["y", "0"])]);
        let err = detect(&ds, Some("n")).unwrap_err();
        assert!(matches!(err, AutoConfigError::ZeroTotalWeight(_)));
    }

    #[test]
    fn test_every_column_classified_once() {
        let rows = (0..30)
            .map(|i| {
                vec![
                    FieldValue::Int(i),
                    FieldValue::Float(i as f64 + 0.25),
                    FieldValue::from(if i % 2 == 0 { "on" } else { "off" }),
                ]
            })
            .collect();
        let types = detect(&dataset(&["i", "f", "s"], rows), None).unwrap();
        let names: Vec<_> = types.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["i", "f", "s"]);
        assert_eq!(types.get("f"), Some(FieldType::Float));
        assert_eq!(types.get("s"), Some(FieldType::Multinomial));
    }

    #[test]
    fn test_custom_threshold() {
        let rows = (0..100).map(|i| vec![FieldValue::Int(i % 20)]).collect();
        let ds = dataset(&["n"], rows);

        assert_eq!(detect(&ds, None).unwrap().get("n"), Some(FieldType::Int));

        let config = DetectorConfig::builder()
            .multinomial_threshold(0.25)
            .build()
            .unwrap();
        let types = TypeDetector::with_config(config).unwrap().detect(&ds).unwrap();
        assert_eq!(types.get("n"), Some(FieldType::Multinomial));
    }
}
