use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record: ordered field names mapped to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop every field not named in `keep`, preserving field order.
    pub fn retain_fields<S: AsRef<str>>(&mut self, keep: &[S]) {
        self.fields
            .retain(|name, _| keep.iter().any(|kept| kept.as_ref() == name));
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name:?}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// In-memory records keyed by record identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: IndexMap<String, Record>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, record: Record) -> Option<Record> {
        self.records.insert(id.into(), record)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Prune the record under `id` down to the fields named in `keep`.
    ///
    /// Returns the record as it was before pruning, or `None` when no record
    /// is stored under `id`, in which case nothing changes.
    pub fn retain_only<S: AsRef<str>>(&mut self, id: &str, keep: &[S]) -> Option<Record> {
        let record = self.records.get_mut(id)?;
        let previous = record.clone();
        record.retain_fields(keep);
        Some(previous)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Record)> for RecordStore {
    fn from_iter<T: IntoIterator<Item = (K, Record)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().map(|(id, record)| (id.into(), record)).collect(),
        }
    }
}
