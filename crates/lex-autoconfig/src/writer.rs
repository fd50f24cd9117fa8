//! Config file rendering.
//!
//! Output layout:
//!
//! ```text
//! <HEADER>
//!
//! [LG_1]
//! generator_type = <kind>
//! <param> = <value>
//!
//! ...
//! [AnomalyScoring]
//! scoring_algorithm = StatisticalNGramAnomaly
//! ```

use crate::catalog::GeneratorCatalog;
use crate::error::{Result, ResultExt};
use crate::types::GeneratorDescriptor;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Commented templates of every generator, written at the top of each config.
pub const HEADER: &str = "; OSAS autogenerated configuration file
;
; Below we provide a list of standard label generator templates - feel free to copy-paste and edit them
; in order to cope with your own dataset
;

; [LG_MULTINOMIAL]
; generator_type = MultinomialField
; field_name = <FIELD_NAME>
; absolute_threshold = 10
; relative_threshold = 0.1

; [LG_TEXT]
; generator_type = TextField
; field_name = <FIELD_NAME>
; lm_mode = char
; ngram_range = (3, 5)

; [LG_NUMERIC]
; generator_type = NumericField
; field_name = <FIELD_NAME>

; [LG_MULTINOMIAL_COMBINER]
; generator_type = MultinomialFieldCombiner
; field_names = ['<FIELD_1>', '<FIELD_2>', ...]
; absolute_threshold = 10
; relative_threshold = 0.1

; [LG_KEYWORD]
; generator_type = KeywordBased
; field_name = <FIELD_NAME>
; keyword_list = ['<KEYWORD_1>', '<KEYWORD_2>', '<KEYWORD_3>', ...]

; [LG_REGEX]
; generator_type = KnowledgeBased
; field_name = <FIELD_NAME>
; rules_and_labels_tuple_list = [('<REGEX_1>','<LABEL_1>'), ('<REGEX_2>','<LABEL_2>'), ...]";

/// Closing section selecting the scoring algorithm.
pub const ANOMALY_SCORING: &str = "[AnomalyScoring]\nscoring_algorithm = StatisticalNGramAnomaly\n";

/// Render the full config text.
pub fn render_config(
    generators: &[GeneratorDescriptor],
    catalog: &GeneratorCatalog,
) -> Result<String> {
    let mut out = String::with_capacity(HEADER.len() + 128 * (generators.len() + 1));
    out.push_str(HEADER);
    out.push_str("\n\n");

    for (idx, generator) in generators.iter().enumerate() {
        out.push_str(&format!("[LG_{}]\n", idx + 1));
        out.push_str(&format!("generator_type = {}\n", generator.kind));

        for param in catalog.params(generator.kind)? {
            let value = if param.is_field_binding() {
                field_binding(&generator.fields)
            } else {
                param.default.to_string()
            };
            out.push_str(&format!("{} = {}\n", param.name, value));
        }
        out.push('\n');
    }

    out.push_str(ANOMALY_SCORING);
    Ok(out)
}

/// Render and write the config to `path`.
///
/// Nothing is created when rendering fails.
pub fn write_config(
    generators: &[GeneratorDescriptor],
    catalog: &GeneratorCatalog,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let content = render_config(generators, catalog)?;

    let file =
        File::create(path).context(format!("Failed to create config file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .context(format!("Failed to write config file {}", path.display()))?;

    info!(
        "Wrote {} generator sections to {}",
        generators.len(),
        path.display()
    );
    Ok(())
}

/// A lone column is written bare; several become a quoted list.
fn field_binding(fields: &[String]) -> String {
    match fields {
        [single] => single.clone(),
        many => {
            let quoted: Vec<String> = many.iter().map(|f| quote(f)).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

fn quote(field: &str) -> String {
    let escaped = field.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}
