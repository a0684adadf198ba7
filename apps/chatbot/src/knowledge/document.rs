//! Loose accessors over the project-data JSON.
//!
//! The document is never validated. Every lookup that misses, or hits a value
//! of the wrong shape, resolves to an empty record or to [`NOT_AVAILABLE`].

use std::fmt;

use serde_json::{Map, Value};

/// Rendered in place of any absent or null field.
pub const NOT_AVAILABLE: &str = "N/A";

/// The project-data document as loaded from disk, or `{}` when unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    root: Value,
}

impl ProjectDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn empty() -> Self {
        Self::new(Value::Object(Map::new()))
    }

    /// True when the top-level key is present, whatever its value.
    pub fn has_section(&self, key: &str) -> bool {
        self.root
            .as_object()
            .is_some_and(|root| root.contains_key(key))
    }

    /// Element 0 of a non-empty array section.
    pub fn first(&self, key: &str) -> Option<Record<'_>> {
        self.array(key).first().map(Record::new)
    }

    /// Every element of an array section, in order. Empty for anything that isn't an array.
    pub fn all(&self, key: &str) -> impl Iterator<Item = Record<'_>> {
        self.array(key).iter().map(Record::new)
    }

    pub fn count(&self, key: &str) -> usize {
        self.array(key).len()
    }

    fn array(&self, key: &str) -> &[Value] {
        self.root
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// A mapping inside the document. Non-mapping values behave as an empty mapping.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Nested mapping under `key`; empty when missing.
    pub fn section(&self, key: &str) -> Record<'a> {
        Record {
            fields: self.get(key).and_then(Value::as_object),
        }
    }

    pub fn field(&self, key: &str) -> FieldValue<'a> {
        FieldValue(self.get(key))
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }
}

/// A leaf value ready for display.
///
/// Strings print verbatim, numbers and booleans in JSON notation, nested
/// values as compact JSON, absent and null as `N/A`.
#[derive(Debug, Clone, Copy)]
pub struct FieldValue<'a>(Option<&'a Value>);

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => f.write_str(NOT_AVAILABLE),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}
