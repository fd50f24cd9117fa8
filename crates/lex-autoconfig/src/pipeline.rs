//! End-to-end run: detect types, select generators, write the config.

use crate::catalog::GeneratorCatalog;
use crate::config::DetectorConfig;
use crate::detector::{Detection, TypeDetector};
use crate::error::{Result, ResultExt};
use crate::reporting::AutoConfigReport;
use crate::selector::select;
use crate::source::{DataSource, load_csv};
use crate::types::{ColumnTypeMap, GeneratorDescriptor};
use crate::writer::write_config;
use std::path::Path;
use tracing::info;

/// Detected types plus the generators chosen for them.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub detection: Detection,
    pub generators: Vec<GeneratorDescriptor>,
}

impl Suggestion {
    pub fn field_types(&self) -> &ColumnTypeMap {
        &self.detection.types
    }
}

/// Runs detection, selection and config writing in sequence.
#[derive(Debug, Clone)]
pub struct AutoConfig {
    detector: TypeDetector,
    catalog: GeneratorCatalog,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            detector: TypeDetector::new(),
            catalog: GeneratorCatalog::standard(),
        }
    }
}

impl AutoConfig {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        Ok(Self {
            detector: TypeDetector::with_config(config)?,
            catalog: GeneratorCatalog::standard(),
        })
    }

    /// Replace the generator catalog.
    pub fn with_catalog(mut self, catalog: GeneratorCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        self.detector.config()
    }

    /// Detect types and select generators. Touches no files.
    pub fn run<S: DataSource + ?Sized>(&self, source: &S) -> Result<Suggestion> {
        let detection = self.detector.detect_with_stats(source)?;
        let generators = select(&detection.types);
        info!(
            "Selected {} generators for {} columns",
            generators.len(),
            detection.types.len()
        );
        Ok(Suggestion {
            detection,
            generators,
        })
    }

    /// Load `input`, suggest generators and write the config to `output`.
    ///
    /// The output file is only created once detection has succeeded.
    pub fn run_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<AutoConfigReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        info!("Loading dataset from: {}", input.display());
        let dataset = load_csv(input)?;

        let suggestion = self
            .run(&dataset)
            .context(format!("Failed to analyze {}", input.display()))?;
        write_config(&suggestion.generators, &self.catalog, output)?;

        Ok(
            AutoConfigReport::from_suggestion(&suggestion, self.config().count_column.as_deref())
                .with_files(input.display().to_string(), output.display().to_string()),
        )
    }
}
