//! Static registry of label generator parameters.
//!
//! The config writer needs each generator's parameter names and defaults in
//! declaration order. They are declared here once rather than discovered
//! from the generator implementations.

use crate::error::{AutoConfigError, Result};
use crate::types::GeneratorKind;
use std::collections::BTreeMap;

/// Parameter replaced by the descriptor's single column name.
pub const FIELD_NAME: &str = "field_name";
/// Parameter replaced by the descriptor's column list.
pub const FIELD_NAMES: &str = "field_names";

/// A constructor parameter and its default, already formatted for the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default: &'static str) -> Self {
        Self { name, default }
    }

    /// Whether the writer substitutes column names for this parameter.
    pub fn is_field_binding(&self) -> bool {
        self.name == FIELD_NAME || self.name == FIELD_NAMES
    }
}

const MULTINOMIAL_FIELD: &[ParamSpec] = &[
    ParamSpec::new(FIELD_NAME, ""),
    ParamSpec::new("absolute_threshold", "10"),
    ParamSpec::new("relative_threshold", "0.1"),
];

const TEXT_FIELD: &[ParamSpec] = &[
    ParamSpec::new(FIELD_NAME, ""),
    ParamSpec::new("lm_mode", "char"),
    ParamSpec::new("ngram_range", "(3, 5)"),
];

const NUMERIC_FIELD: &[ParamSpec] = &[ParamSpec::new(FIELD_NAME, "")];

const MULTINOMIAL_FIELD_COMBINER: &[ParamSpec] = &[
    ParamSpec::new(FIELD_NAMES, "[]"),
    ParamSpec::new("absolute_threshold", "10"),
    ParamSpec::new("relative_threshold", "0.1"),
];

const KEYWORD_BASED: &[ParamSpec] = &[
    ParamSpec::new(FIELD_NAME, ""),
    ParamSpec::new("keyword_list", "[]"),
];

const KNOWLEDGE_BASED: &[ParamSpec] = &[
    ParamSpec::new(FIELD_NAME, ""),
    ParamSpec::new("rules_and_labels_tuple_list", "[]"),
];

/// Generator kind to ordered parameter list.
#[derive(Debug, Clone, Default)]
pub struct GeneratorCatalog {
    entries: BTreeMap<GeneratorKind, Vec<ParamSpec>>,
}

impl GeneratorCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of generators shipped with the anomaly pipeline.
    pub fn standard() -> Self {
        Self::new()
            .register(GeneratorKind::KeywordBased, KEYWORD_BASED)
            .register(GeneratorKind::KnowledgeBased, KNOWLEDGE_BASED)
            .register(GeneratorKind::MultinomialField, MULTINOMIAL_FIELD)
            .register(
                GeneratorKind::MultinomialFieldCombiner,
                MULTINOMIAL_FIELD_COMBINER,
            )
            .register(GeneratorKind::NumericField, NUMERIC_FIELD)
            .register(GeneratorKind::TextField, TEXT_FIELD)
    }

    /// Add or replace the parameter list of a generator kind.
    pub fn register(mut self, kind: GeneratorKind, params: &[ParamSpec]) -> Self {
        self.entries.insert(kind, params.to_vec());
        self
    }

    pub fn params(&self, kind: GeneratorKind) -> Result<&[ParamSpec]> {
        self.entries
            .get(&kind)
            .map(Vec::as_slice)
            .ok_or_else(|| AutoConfigError::UnknownGenerator(kind.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_covers_all_kinds() {
        let catalog = GeneratorCatalog::standard();
        for kind in GeneratorKind::ALL {
            assert!(catalog.params(kind).is_ok(), "missing {}", kind);
        }
    }

    #[test]
    fn test_parameter_order_is_declaration_order() {
        let catalog = GeneratorCatalog::standard();
        let names: Vec<_> = catalog
            .params(GeneratorKind::TextField)
            .unwrap()
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["field_name", "lm_mode", "ngram_range"]);
    }

    #[test]
    fn test_every_generator_binds_columns_first() {
        let catalog = GeneratorCatalog::standard();
        for kind in GeneratorKind::ALL {
            let params = catalog.params(kind).unwrap();
            assert!(params[0].is_field_binding(), "{} has no field binding", kind);
        }
    }

    #[test]
    fn test_combiner_uses_field_names() {
        let catalog = GeneratorCatalog::standard();
        let params = catalog
            .params(GeneratorKind::MultinomialFieldCombiner)
            .unwrap();
        assert_eq!(params[0].name, FIELD_NAMES);
    }

    #[test]
    fn test_unknown_kind_in_custom_catalog() {
        let catalog = GeneratorCatalog::new().register(GeneratorKind::NumericField, NUMERIC_FIELD);
        let err = catalog.params(GeneratorKind::TextField).unwrap_err();
        assert!(matches!(err, AutoConfigError::UnknownGenerator(ref k) if k == "TextField"));
    }
}
