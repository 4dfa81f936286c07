use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::errors::{JobDbError, Result};
use crate::core::models::audit_record::AuditRecord;
use crate::core::traits::audit::{AuditFilter, AuditLog};

/// Audit log that appends one plain-text line per record to a file.
///
/// The file is opened once, in append mode, and held for the lifetime of
/// the logger. Writers are serialized through a mutex so lines from
/// concurrent callers never interleave.
pub struct FileAuditLog {
    log_path: PathBuf,
    file: Mutex<File>,
}

impl FileAuditLog {
    /// Open (or create) the log at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| JobDbError::AuditError {
                detail: format!("Cannot create {}: {e}", parent.display()),
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| JobDbError::AuditError {
                detail: format!("Cannot open audit log at {}: {e}", log_path.display()),
            })?;

        Ok(Self {
            log_path,
            file: Mutex::new(file),
        })
    }

    /// Return the file path this log writes to.
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Flush and sync the log to disk, then release the handle.
    pub fn close(self) -> Result<()> {
        let file = self.file.into_inner().map_err(|_| JobDbError::AuditError {
            detail: "audit log lock poisoned".into(),
        })?;
        file.sync_all().map_err(|e| JobDbError::AuditError {
            detail: format!("Failed to sync audit log: {e}"),
        })
    }

    /// Read records from `path` without opening it for writing.
    /// A missing file reads as an empty log.
    pub fn read(path: &Path, filter: &AuditFilter) -> Result<Vec<AuditRecord>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path).map_err(|e| JobDbError::AuditError {
            detail: format!("Cannot read audit log: {e}"),
        })?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| JobDbError::AuditError {
                detail: format!("Error reading audit log line {}: {e}", line_num + 1),
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record = AuditRecord::parse(&line).ok_or_else(|| JobDbError::AuditError {
                detail: format!("Malformed audit line {}: {line}", line_num + 1),
            })?;

            if filter.matches(&record) {
                records.push(record);
            }
        }

        Ok(records)
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, record: &AuditRecord) -> Result<()> {
        let line = format!("{record}\n");

        let mut file = self.file.lock().map_err(|_| JobDbError::AuditError {
            detail: "audit log lock poisoned".into(),
        })?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| JobDbError::AuditError {
                detail: format!("Failed to write audit line: {e}"),
            })
    }

    fn query(&self, filter: &AuditFilter) -> Result<Vec<AuditRecord>> {
        Self::read(&self.log_path, filter)
    }
}
