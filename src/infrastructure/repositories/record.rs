//! JSON Record Repository
//!
//! A record is one exported profile/project row stored as a JSON object. The
//! selection lives in a single string-array column; every other field is left
//! untouched on save.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::domain::ports::RecordRepository;
use crate::error::{SkilltreeError, SkilltreeResult};

/// Field stamped on every save
pub const UPDATED_AT_FIELD: &str = "updated_at";

pub struct JsonRecordRepository {
    path: PathBuf,
}

impl JsonRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn invalid(&self, column: &str, message: impl Into<String>) -> SkilltreeError {
        SkilltreeError::InvalidRecord {
            file: self.path.clone(),
            column: column.to_string(),
            message: message.into(),
        }
    }

    /// Read the whole record; a missing file is an empty record
    fn load_object(&self, column: &str) -> SkilltreeResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(self.invalid(column, "cannot be read: record is not a JSON object")),
        }
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_object(&self, record: &Map<String, Value>) -> SkilltreeResult<()> {
        let mut content = serde_json::to_string_pretty(record)?;
        content.push('\n');

        let mut tmp = NamedTempFile::new_in(self.dir())?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl RecordRepository for JsonRecordRepository {
    fn load_column(&self, column: &str) -> SkilltreeResult<Vec<String>> {
        let record = self.load_object(column)?;
        match record.get(column) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| {
                    value
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.invalid(column, format!("contains non-string value {value}")))
                })
                .collect(),
            Some(other) => Err(self.invalid(
                column,
                format!("must be a string array, found {}", value_kind(other)),
            )),
        }
    }

    fn save_column(&self, column: &str, values: &[String]) -> SkilltreeResult<()> {
        fs::create_dir_all(self.dir())?;
        let lock_file = fs::File::create(self.lock_path())?;
        lock_file.lock_exclusive()?;

        let result = self.load_object(column).and_then(|mut record| {
            record.insert(
                column.to_string(),
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            );
            record.insert(
                UPDATED_AT_FIELD.to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
            self.write_object(&record)
        });

        let _ = lock_file.unlock();
        result
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
