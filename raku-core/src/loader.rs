//! Loading the static JSON data files
//!
//! Each file is a JSON array of records. Records are decoded one at a time
//! so a single malformed entry costs only that entry, not the whole catalog.

use crate::catalog::Catalog;
use crate::config::ReaderConfig;
use crate::error::{self, LoadError};
use crate::types::{Discussion, Story};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A record that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the source array
    pub index: usize,

    /// The record's `id`, when it had a readable one
    pub id: Option<String>,

    pub reason: String,
}

/// Records decoded from one data file
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> LoadReport<T> {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decode a story array
pub fn parse_stories(json: &str) -> Result<LoadReport<Story>, LoadError> {
    parse_records(json)
}

/// Read and decode a story file
pub fn load_stories(path: impl AsRef<Path>) -> Result<LoadReport<Story>, LoadError> {
    load_records(path.as_ref())
}

/// Decode a discussion topic array
pub fn parse_discussions(json: &str) -> Result<LoadReport<Discussion>, LoadError> {
    parse_records(json)
}

/// Read and decode a discussion topic file
pub fn load_discussions(path: impl AsRef<Path>) -> Result<LoadReport<Discussion>, LoadError> {
    load_records(path.as_ref())
}

impl Catalog {
    /// Load a story file into a catalog, returning the records that were
    /// skipped along the way
    pub fn load(
        path: impl AsRef<Path>,
        config: &ReaderConfig,
    ) -> error::Result<(Catalog, Vec<SkippedRecord>)> {
        let report = load_stories(path)?;
        tracing::info!(
            "Loaded {} stories ({} skipped)",
            report.records.len(),
            report.skipped.len()
        );
        Ok((Catalog::new(report.records, config), report.skipped))
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<LoadReport<T>, LoadError> {
    tracing::debug!("Loading {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_records(&json)
}

fn parse_records<T: DeserializeOwned>(json: &str) -> Result<LoadReport<T>, LoadError> {
    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        other => return Err(LoadError::NotAnArray(kind_of(&other))),
    };

    let mut report = LoadReport {
        records: Vec::with_capacity(items.len()),
        skipped: Vec::new(),
    };

    for (index, item) in items.into_iter().enumerate() {
        let id = record_id(&item);
        match serde_json::from_value::<T>(item) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                tracing::warn!("Skipping record {} ({:?}): {}", index, id, e);
                report.skipped.push(SkippedRecord {
                    index,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

fn record_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
