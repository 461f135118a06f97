//! Concrete corpus sources: queryable sets of records the collector turns
//! into `Guide` values.

use std::fs;
use std::path::PathBuf;

use guidesearch_core::traits::{GuideRecord, GuideSource};
use guidesearch_core::types::Excerpts;
use serde_json::Value;

/// One JSON object exposed as a guide record. Only string attribute values
/// are visible through `field`; anything else reads as absent.
pub struct JsonRecord(Value);

impl JsonRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

impl GuideRecord for JsonRecord {
    fn field(&self, name: &str) -> Option<String> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }

    fn content(&self) -> Option<Excerpts> {
        match self.0.get("content") {
            Some(Value::String(s)) => Some(Excerpts::One(s.clone())),
            Some(Value::Array(items)) => Some(Excerpts::Many(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect(),
            )),
            _ => None,
        }
    }
}

/// A single JSON file whose root is an array of guide objects.
///
/// An unreadable file or a non-array root makes the source unavailable.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl GuideSource for JsonFileSource {
    fn records(&self) -> Option<Vec<Box<dyn GuideRecord + '_>>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let root: Value = serde_json::from_str(&raw).ok()?;
        let items = root.as_array()?;
        Some(
            items
                .iter()
                .map(|v| Box::new(JsonRecord::new(v.clone())) as Box<dyn GuideRecord>)
                .collect(),
        )
    }
}

/// A directory of one-object-per-file `*.json` records, collected in sorted
/// path order. A missing directory makes the source unavailable; a record
/// file that fails to parse is skipped, not fatal.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl GuideSource for DirSource {
    fn records(&self) -> Option<Vec<Box<dyn GuideRecord + '_>>> {
        if !self.dir.is_dir() {
            return None;
        }
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&self.dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        files.sort();

        let mut records: Vec<Box<dyn GuideRecord>> = Vec::with_capacity(files.len());
        for path in files {
            let Ok(raw) = fs::read_to_string(&path) else {
                tracing::warn!(path = %path.display(), "skipping unreadable corpus record");
                continue;
            };
            match serde_json::from_str::<Value>(&raw) {
                Ok(v) if v.is_object() => records.push(Box::new(JsonRecord::new(v))),
                _ => {
                    tracing::warn!(path = %path.display(), "skipping unparsable corpus record");
                }
            }
        }
        Some(records)
    }
}

/// In-memory records, mainly for tests and embedding hosts.
pub struct MemorySource {
    values: Vec<Value>,
}

impl MemorySource {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl GuideSource for MemorySource {
    fn records(&self) -> Option<Vec<Box<dyn GuideRecord + '_>>> {
        Some(
            self.values
                .iter()
                .map(|v| Box::new(JsonRecord::new(v.clone())) as Box<dyn GuideRecord>)
                .collect(),
        )
    }
}
