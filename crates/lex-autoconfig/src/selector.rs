//! Generator selection.
//!
//! Maps detected column types to generator descriptors: one single-column
//! generator per column, plus one combiner for every unordered pair of
//! multinomial columns.

use crate::types::{ColumnTypeMap, FieldType, GeneratorDescriptor, GeneratorKind};

/// Select generators for the detected column types.
///
/// The result is sorted by generator kind name; descriptors of the same kind
/// keep column order.
pub fn select(field_types: &ColumnTypeMap) -> Vec<GeneratorDescriptor> {
    let mut generators: Vec<GeneratorDescriptor> = field_types
        .iter()
        .filter_map(|(column, field_type)| {
            field_type
                .generator_kind()
                .map(|kind| GeneratorDescriptor::single(kind, column))
        })
        .collect();

    let multinomial = field_types.columns_of(FieldType::Multinomial);
    for (idx, first) in multinomial.iter().enumerate() {
        for second in &multinomial[idx + 1..] {
            generators.push(GeneratorDescriptor::pair(
                GeneratorKind::MultinomialFieldCombiner,
                *first,
                *second,
            ));
        }
    }

    generators.sort_by_key(|g| g.kind.as_str());
    generators
}
