use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AutoConfigError;

// ============================================================================
// Raw values
// ============================================================================

/// A raw scalar read from a data source.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Result of probing a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    None,
    Str,
}

// ============================================================================
// Column types
// ============================================================================

/// Semantic type assigned to a column.
///
/// Every tag currently maps to a generator; a tag added later without a
/// generator must return `None` from [`FieldType::generator_kind`] so the
/// selector skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Int,
    Float,
    Multinomial,
    Text,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Multinomial => "multinomial",
            FieldType::Text => "text",
        }
    }

    /// The single-column generator that models this type.
    pub fn generator_kind(&self) -> Option<GeneratorKind> {
        match self {
            FieldType::Int | FieldType::Float => Some(GeneratorKind::NumericField),
            FieldType::Multinomial => Some(GeneratorKind::MultinomialField),
            FieldType::Text => Some(GeneratorKind::TextField),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name to semantic type, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypeMap {
    entries: Vec<(String, FieldType)>,
}

impl ColumnTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the type of a column. Replacing keeps the original position.
    pub fn insert(&mut self, column: impl Into<String>, field_type: FieldType) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = field_type,
            None => self.entries.push((column, field_type)),
        }
    }

    pub fn get(&self, column: &str) -> Option<FieldType> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), *t))
    }

    /// Columns of the given type, in column order.
    pub fn columns_of(&self, field_type: FieldType) -> Vec<&str> {
        self.iter()
            .filter(|(_, t)| *t == field_type)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldType)> for ColumnTypeMap {
    fn from_iter<I: IntoIterator<Item = (S, FieldType)>>(iter: I) -> Self {
        let mut map = ColumnTypeMap::new();
        for (column, field_type) in iter {
            map.insert(column, field_type);
        }
        map
    }
}

impl Serialize for ColumnTypeMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, field_type) in &self.entries {
            map.serialize_entry(name, field_type)?;
        }
        map.end()
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Label generator kinds known to the downstream pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneratorKind {
    KeywordBased,
    KnowledgeBased,
    MultinomialField,
    MultinomialFieldCombiner,
    NumericField,
    TextField,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 6] = [
        GeneratorKind::KeywordBased,
        GeneratorKind::KnowledgeBased,
        GeneratorKind::MultinomialField,
        GeneratorKind::MultinomialFieldCombiner,
        GeneratorKind::NumericField,
        GeneratorKind::TextField,
    ];

    /// Name written to `generator_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::KeywordBased => "KeywordBased",
            GeneratorKind::KnowledgeBased => "KnowledgeBased",
            GeneratorKind::MultinomialField => "MultinomialField",
            GeneratorKind::MultinomialFieldCombiner => "MultinomialFieldCombiner",
            GeneratorKind::NumericField => "NumericField",
            GeneratorKind::TextField => "TextField",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = AutoConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AutoConfigError::UnknownGenerator(s.to_string()))
    }
}

/// A generator kind bound to the column(s) it will read.
///
/// Multi-column descriptors compare as unordered sets: a combiner over
/// `(a, b)` equals one over `(b, a)`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorDescriptor {
    pub kind: GeneratorKind,
    pub fields: Vec<String>,
}

impl GeneratorDescriptor {
    pub fn single(kind: GeneratorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            fields: vec![field.into()],
        }
    }

    pub fn pair(kind: GeneratorKind, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            kind,
            fields: vec![first.into(), second.into()],
        }
    }

    fn field_set(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }
}

impl PartialEq for GeneratorDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.field_set() == other.field_set()
    }
}

impl Eq for GeneratorDescriptor {}

impl fmt::Display for GeneratorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.kind, self.fields)
    }
}
