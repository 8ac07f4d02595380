//! Record store for studentrecords.
//!
//! This module provides the in-memory student table and keeps it in sync with
//! a flat backing file. The file is read once by [`RecordStore::load`] and
//! rewritten in full after every mutation.

pub mod codec;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::student::Student;

/// Keyed table of students backed by a text file.
///
/// Records are kept in insertion order. Overwriting an id keeps its
/// position; removing one shifts the later records up without reordering
/// them.
#[derive(Debug)]
pub struct RecordStore {
    /// Path to the backing file.
    path: PathBuf,
    /// Records in insertion order.
    records: Vec<Student>,
    /// Position of each id in `records`.
    positions: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store bound to the given backing file.
    ///
    /// Nothing is read until [`RecordStore::load`] is called.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the table with the contents of the backing file.
    ///
    /// A missing file yields an empty table. Later duplicate ids overwrite
    /// earlier ones. Returns the number of records now in the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] or [`Error::Load`] if the file cannot be read
    /// or any line is malformed. The table is left empty in both cases.
    pub fn load(&mut self) -> Result<usize> {
        self.records.clear();
        self.positions.clear();

        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No backing file at {}, starting empty", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                warn!("Could not read {}: {}", self.path.display(), source);
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let students = match codec::parse_table(&text, &self.path) {
            Ok(students) => students,
            Err(err) => {
                warn!("Discarding contents of {}: {}", self.path.display(), err);
                return Err(err);
            }
        };
        for student in students {
            self.upsert(student);
        }

        info!(
            "Loaded {} records from {}",
            self.records.len(),
            self.path.display()
        );
        Ok(self.records.len())
    }

    /// Insert a record, overwriting any record with the same id, then save.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if the backing file could not be written. The
    /// record is in the table regardless.
    pub fn add(&mut self, student: Student) -> Result<()> {
        debug!("Adding record {}", student.id);
        self.upsert(student);
        self.save()
    }

    /// Replace the record stored under `id`, then save.
    ///
    /// The replacement is stored under `id` whatever id it carries. Returns
    /// `false` without saving when `id` is not in the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if the backing file could not be written. The
    /// replacement is in the table regardless.
    pub fn update(&mut self, id: &str, mut student: Student) -> Result<bool> {
        let Some(&position) = self.positions.get(id) else {
            debug!("Update skipped, no record {}", id);
            return Ok(false);
        };

        id.clone_into(&mut student.id);
        self.records[position] = student;
        debug!("Updated record {}", id);
        self.save()?;
        Ok(true)
    }

    /// Remove the record stored under `id`, then save.
    ///
    /// Returns `false` without saving when `id` is not in the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if the backing file could not be written. The
    /// record is gone from the table regardless.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(position) = self.positions.remove(id) else {
            debug!("Delete skipped, no record {}", id);
            return Ok(false);
        };

        self.records.remove(position);
        for student in &self.records[position..] {
            if let Some(slot) = self.positions.get_mut(&student.id) {
                *slot -= 1;
            }
        }
        debug!("Deleted record {}", id);
        self.save()?;
        Ok(true)
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.positions.get(id).map(|&position| &self.records[position])
    }

    /// All records in table order.
    #[must_use]
    pub fn list(&self) -> &[Student] {
        &self.records
    }

    /// Records whose name contains `query`, ignoring case, in table order.
    ///
    /// An empty query returns every record.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<&Student> {
        self.records
            .iter()
            .filter(|student| student.name_contains(query))
            .collect()
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert or overwrite in memory only.
    fn upsert(&mut self, student: Student) {
        if let Some(&position) = self.positions.get(&student.id) {
            self.records[position] = student;
        } else {
            self.positions
                .insert(student.id.clone(), self.records.len());
            self.records.push(student);
        }
    }

    /// Overwrite the backing file with the whole table.
    fn save(&self) -> Result<()> {
        let to_save_error = |source: std::io::Error| Error::Save {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(to_save_error)?;
            }
        }

        std::fs::write(&self.path, codec::render_table(&self.records)).map_err(|source| {
            warn!("Could not write {}: {}", self.path.display(), source);
            to_save_error(source)
        })?;

        debug!(
            "Saved {} records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }
}
