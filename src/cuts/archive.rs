// src/cuts/archive.rs — Reading cut records out of cut files
//
// A cut file is a JSON object mapping record keys to cut records. The file
// is opened, read and closed inside each call.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use super::VarCut;
use crate::infra::errors::CutChainError;

/// Lookup of named cut records inside cut files.
#[cfg_attr(test, mockall::automock)]
pub trait CutArchive: Send + Sync {
    /// `Ok(None)` when the file has no record under `key`.
    fn read_record(&self, path: &Path, key: &str) -> Result<Option<VarCut>, CutChainError>;
}

#[derive(Debug, Default, Clone)]
pub struct JsonCutArchive;

impl JsonCutArchive {
    pub fn new() -> Self {
        Self
    }

    fn read_all(path: &Path) -> Result<Map<String, Value>, CutChainError> {
        let file = File::open(path).map_err(|e| archive_error(path, e))?;
        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| archive_error(path, e))?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(archive_error(
                path,
                format!("expected an object of records, found {}", type_name(&other)),
            )),
        }
    }

    /// Store `cut` under `key`, keeping any other records already in the file.
    pub fn write_record(&self, path: &Path, key: &str, cut: &VarCut) -> Result<(), CutChainError> {
        let mut records = if path.exists() {
            Self::read_all(path)?
        } else {
            Map::new()
        };
        let value = serde_json::to_value(cut).map_err(|e| archive_error(path, e))?;
        records.insert(key.to_string(), value);

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &Value::Object(records))
            .map_err(|e| archive_error(path, e))?;
        writer.flush()?;
        Ok(())
    }
}

impl CutArchive for JsonCutArchive {
    fn read_record(&self, path: &Path, key: &str) -> Result<Option<VarCut>, CutChainError> {
        let mut records = Self::read_all(path)?;
        match records.remove(key) {
            Some(value) => {
                let cut = serde_json::from_value(value).map_err(|e| archive_error(path, e))?;
                Ok(Some(cut))
            }
            None => Ok(None),
        }
    }
}

fn archive_error(path: &Path, err: impl std::fmt::Display) -> CutChainError {
    CutChainError::Archive {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
