use std::collections::BTreeMap;

use crate::data::value::Value;

/// Column values of a record together with the values last synced with
/// storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<String, Value>,
    original: BTreeMap<String, Value>,
    exists: bool,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// True when the column is missing, `Null` or an empty string.
    pub fn is_empty_at(&self, column: &str) -> bool {
        self.values.get(column).is_none_or(Value::is_empty)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Value of the column as of the last sync with storage.
    pub fn original(&self, column: &str) -> Option<&Value> {
        self.original.get(column)
    }

    pub fn is_dirty(&self, column: &str) -> bool {
        self.values.get(column) != self.original.get(column)
    }

    pub fn dirty_columns(&self) -> Vec<&str> {
        self.values
            .keys()
            .chain(self.original.keys())
            .map(String::as_str)
            .filter(|column| self.is_dirty(column))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether the record has been written to storage.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Marks the current values as stored. Called by providers after a
    /// successful write or when hydrating a row.
    pub fn sync_original(&mut self) {
        self.original = self.values.clone();
        self.exists = true;
    }
}
