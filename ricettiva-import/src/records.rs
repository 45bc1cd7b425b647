//! Source files and the skipped-records side channel.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ricettiva_catalog::Rejection;
use ricettiva_core::RawRecord;
use serde_json::{Value, json};

use crate::batch::ImportError;

fn io_error(path: &Path, source: std::io::Error) -> ImportError {
    ImportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let value: Value = serde_json::from_str(&contents)?;
    let format_error = |message: String| ImportError::Format {
        path: path.display().to_string(),
        message,
    };

    let Value::Array(items) = value else {
        return Err(format_error("expected a JSON array of records".to_string()));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(format_error(format!("record {} is not an object: {}", i, other))),
        })
        .collect()
}

/// Append-only JSON-lines log of rejected records.
///
/// Each line holds the entity, the reason and the untouched source record.
pub struct SkippedLog {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl SkippedLog {
    pub fn open(path: &Path) -> Result<Self, ImportError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn write(&mut self, rejection: &Rejection) -> Result<(), ImportError> {
        let line = json!({
            "entity": rejection.entity.name(),
            "reason": rejection.reason.to_string(),
            "record": rejection.raw,
        });
        writeln!(self.writer, "{}", line).map_err(|e| io_error(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a>(
        &mut self,
        rejections: impl IntoIterator<Item = &'a Rejection>,
    ) -> Result<(), ImportError> {
        for rejection in rejections {
            self.write(rejection)?;
        }
        Ok(())
    }

    /// Lines written through this handle.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&mut self) -> Result<(), ImportError> {
        self.writer.flush().map_err(|e| io_error(&self.path, e))
    }
}
