//! Expense store over a delimited text file
//!
//! The store is an ordered sequence of records, one per line. All operations
//! are whole-file: load reads everything, overwrite replaces everything.
//! There is no locking; the design assumes a single process and a single
//! user. A load→mutate→overwrite sequence is one logical critical section
//! that nothing enforces — two concurrent processes can lose data. Known
//! limitation, out of scope to fix.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseRecord;

use super::line::{parse_line, render_line, ParseWarning};

/// Result of loading the store: the readable records plus warnings for
/// every line that had to be skipped
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Successfully parsed records, in file order
    pub records: Vec<ExpenseRecord>,
    /// Non-fatal warnings for skipped lines
    pub warnings: Vec<ParseWarning>,
}

/// File-backed expense store
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records
    ///
    /// A missing file is not an error; it means "no records yet". Blank
    /// lines are ignored. Malformed lines are skipped and reported as
    /// warnings, never as failures.
    pub fn load(&self) -> TrackerResult<LoadOutcome> {
        self.load_with_now(Local::now().naive_local())
    }

    /// Load all records, defaulting missing timestamps to `now`
    pub fn load_with_now(&self, now: NaiveDateTime) -> TrackerResult<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }

        let file = File::open(&self.path).map_err(|e| {
            TrackerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut outcome = LoadOutcome::default();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line, index + 1, now) {
                Ok(record) => outcome.records.push(record),
                Err(warning) => outcome.warnings.push(warning),
            }
        }

        Ok(outcome)
    }

    /// Append one record as a new line at the end of the store
    ///
    /// Does not reparse or validate existing content.
    pub fn append(&self, record: &ExpenseRecord) -> TrackerResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TrackerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", render_line(record)).map_err(|e| {
            TrackerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        writer.flush().map_err(|e| {
            TrackerError::Storage(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    /// Replace the entire store with exactly one line per record, in order
    ///
    /// Used both for resaves and for deletion (by omission). The rewrite is
    /// not transactional: a failure mid-write can leave a truncated file.
    pub fn overwrite(&self, records: &[ExpenseRecord]) -> TrackerResult<()> {
        let file = File::create(&self.path).map_err(|e| {
            TrackerError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        for record in records {
            writeln!(writer, "{}", render_line(record)).map_err(|e| {
                TrackerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        }
        writer.flush().map_err(|e| {
            TrackerError::Storage(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    /// Delete the record at a 1-based position and rewrite the store
    ///
    /// Returns the removed record. Fails with an invalid-selection error
    /// when the index is out of bounds, leaving the store untouched.
    pub fn delete(&self, index: usize) -> TrackerResult<ExpenseRecord> {
        let mut records = self.load()?.records;

        if index == 0 || index > records.len() {
            return Err(TrackerError::InvalidSelection {
                index,
                len: records.len(),
            });
        }

        let removed = records.remove(index - 1);
        self.overwrite(&records)?;
        Ok(removed)
    }
}
