//! Console reporting.
//!
//! Detection and selection return plain data; this module turns that data
//! into the human-readable summary printed by the CLI, or into JSON.

use crate::detector::ColumnStats;
use crate::pipeline::Suggestion;
use crate::types::{FieldType, GeneratorDescriptor, GeneratorKind};
use serde::Serialize;
use std::fmt::Write;

/// Everything the CLI reports about one run.
#[derive(Debug, Clone, Serialize)]
pub struct AutoConfigReport {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub row_count: usize,
    pub total_weight: f64,
    pub count_column: Option<String>,
    pub columns: Vec<ColumnReport>,
    pub generators: Vec<GeneratorReport>,
}

/// Detected type and cardinality of one column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub field_type: FieldType,
    pub distinct_seen: usize,
    pub ratio: f64,
    pub capped: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorReport {
    pub section: String,
    pub generator_type: GeneratorKind,
    pub fields: Vec<String>,
}

impl AutoConfigReport {
    pub fn from_suggestion(suggestion: &Suggestion, count_column: Option<&str>) -> Self {
        let detection = &suggestion.detection;
        let columns = detection
            .stats
            .iter()
            .filter_map(|stats| column_report(stats, detection.types.get(&stats.column)))
            .collect();

        let generators = suggestion
            .generators
            .iter()
            .enumerate()
            .map(|(idx, g)| generator_report(idx, g))
            .collect();

        Self {
            input_file: None,
            output_file: None,
            row_count: detection.row_count,
            total_weight: detection.total_weight,
            count_column: count_column.map(str::to_string),
            columns,
            generators,
        }
    }

    pub fn with_files(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.input_file = Some(input.into());
        self.output_file = Some(output.into());
        self
    }
}

fn column_report(stats: &ColumnStats, field_type: Option<FieldType>) -> Option<ColumnReport> {
    field_type.map(|field_type| ColumnReport {
        name: stats.column.clone(),
        field_type,
        distinct_seen: stats.distinct_seen,
        ratio: stats.ratio,
        capped: stats.capped,
    })
}

fn generator_report(idx: usize, generator: &GeneratorDescriptor) -> GeneratorReport {
    GeneratorReport {
        section: format!("LG_{}", idx + 1),
        generator_type: generator.kind,
        fields: generator.fields.clone(),
    }
}

/// Render the detected types and suggested generators for the console.
pub fn render_human(report: &AutoConfigReport) -> String {
    let mut out = String::new();

    if let Some(ref input) = report.input_file {
        let _ = writeln!(out, "Input:  {} ({} rows)", input, report.row_count);
    }
    if let Some(ref column) = report.count_column {
        let _ = writeln!(
            out,
            "Count column: {} (total weight {})",
            column, report.total_weight
        );
    }

    out.push_str("\t::Detected field types:\n");
    for column in &report.columns {
        let _ = writeln!(out, "\t\t\"{}\": {}", column.name, column.field_type);
    }

    out.push_str("\t::Suggested generators:\n");
    for generator in &report.generators {
        let _ = writeln!(
            out,
            "\t\t{}: {:?}",
            generator.generator_type, generator.fields
        );
    }

    if let Some(ref output) = report.output_file {
        let _ = writeln!(out, "Output: {}", output);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::AutoConfig;
    use crate::source::Dataset;
    use crate::types::FieldValue;
    use pretty_assertions::assert_eq;

    fn suggestion() -> Suggestion {
        let rows = (0..30)
            .map(|i| {
                vec![
                    FieldValue::Int(i),
                    FieldValue::from(if i % 2 == 0 { "GET" } else { "POST" }),
                ]
            })
            .collect();
        let ds = Dataset::from_rows(["bytes", "method"], rows).unwrap();
        AutoConfig::default().run(&ds).unwrap()
    }

    #[test]
    fn test_report_from_suggestion() {
        let report = AutoConfigReport::from_suggestion(&suggestion(), None);
        assert_eq!(report.row_count, 30);
        assert_eq!(report.total_weight, 30.0);
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[0].field_type, FieldType::Int);
        assert_eq!(report.columns[1].field_type, FieldType::Multinomial);
        assert_eq!(report.generators[0].section, "LG_1");
    }

    #[test]
    fn test_render_human() {
        let report = AutoConfigReport::from_suggestion(&suggestion(), None);
        assert_eq!(
            render_human(&report),
            "\t::Detected field types:\n\
             \t\t\"bytes\": int\n\
             \t\t\"method\": multinomial\n\
             \t::Suggested generators:\n\
             \t\tMultinomialField: [\"method\"]\n\
             \t\tNumericField: [\"bytes\"]\n"
        );
    }

    #[test]
    fn test_report_serializes_types_lowercase() {
        let report = AutoConfigReport::from_suggestion(&suggestion(), None)
            .with_files("in.csv", "out.ini");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["columns"][1]["field_type"], "multinomial");
        assert_eq!(json["generators"][1]["generator_type"], "NumericField");
        assert_eq!(json["output_file"], "out.ini");
    }
}
