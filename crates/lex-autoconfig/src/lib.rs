//! Anomaly Detection Config Bootstrapper
//!
//! Infers the shape of every column in a tabular dataset and writes a
//! starting configuration that wires each column to a label generator.
//! The configuration is a suggestion meant to be edited by hand; nothing
//! here validates it or runs the generators.
//!
//! # Overview
//!
//! A run has three stages:
//!
//! - **Type detection**: classify each column as `int`, `float`,
//!   `multinomial` (few distinct values relative to the row count) or `text`
//! - **Generator selection**: one generator per column, plus a combiner for
//!   every pair of multinomial columns
//! - **Config writing**: an INI-like file with one `[LG_n]` section per
//!   generator and a closing `[AnomalyScoring]` section
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_autoconfig::{AutoConfig, DetectorConfig};
//!
//! let config = DetectorConfig::builder()
//!     .count_column("occurrences")
//!     .build()?;
//!
//! let report = AutoConfig::new(config)?.run_file("events.csv", "events.ini")?;
//! println!("{}", lex_autoconfig::reporting::render_human(&report));
//! ```
//!
//! # In-memory data
//!
//! ```rust,ignore
//! use lex_autoconfig::{Dataset, FieldValue, detect, select};
//!
//! let mut ds = Dataset::new(["method", "bytes"])?;
//! ds.push_row([FieldValue::from("GET"), FieldValue::Int(512)])?;
//!
//! let types = detect(&ds, None)?;
//! let generators = select(&types);
//! ```

pub mod catalog;
pub mod config;
pub mod detector;
pub mod error;
pub mod pipeline;
pub mod reporting;
pub mod selector;
pub mod source;
pub mod types;
pub mod writer;

// Re-exports for convenient access
pub use catalog::{GeneratorCatalog, ParamSpec};
pub use config::{ConfigValidationError, DetectorConfig, DetectorConfigBuilder};
pub use detector::{ColumnStats, Detection, TypeDetector, detect, probe_value};
pub use error::{AutoConfigError, Result as AutoConfigResult, ResultExt};
pub use pipeline::{AutoConfig, Suggestion};
pub use reporting::{AutoConfigReport, render_human};
pub use selector::select;
pub use source::{DataSource, Dataset, Row, dataset_from_dataframe, load_csv};
pub use types::{
    ColumnTypeMap, FieldType, FieldValue, GeneratorDescriptor, GeneratorKind, ValueKind,
};
pub use writer::{render_config, write_config};
