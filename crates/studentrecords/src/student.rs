//! Core record type for studentrecords.
//!
//! A [`Student`] is one row of the table. This module also owns the
//! single-line text form used in the backing file.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Separator between fields in the backing file.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in one serialized record.
pub const FIELD_COUNT: usize = 5;

/// One student's stored attributes.
///
/// No field may contain [`FIELD_DELIMITER`]; a record that does will be
/// written out, but the file will fail to load afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique key of the record.
    pub id: String,
    /// Full name, matched by name search.
    pub name: String,
    /// Branch of study.
    pub branch: String,
    /// Current semester.
    pub semester: i32,
    /// Cumulative grade point average.
    pub gpa: f64,
}

impl Student {
    /// Create a new student record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
        semester: i32,
        gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            branch: branch.into(),
            semester,
            gpa,
        }
    }

    /// Serialize to a single `id,name,branch,semester,gpa` line (no newline).
    ///
    /// The gpa uses the shortest representation that parses back to the
    /// same value, so a save/load cycle is lossless.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{id}{d}{name}{d}{branch}{d}{semester}{d}{gpa}",
            id = self.id,
            name = self.name,
            branch = self.branch,
            semester = self.semester,
            gpa = self.gpa,
            d = FIELD_DELIMITER,
        )
    }

    /// Check whether the name contains `query`, ignoring case.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl FromStr for Student {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(Error::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        }

        let semester = fields[3]
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::malformed(format!("invalid semester '{}'", fields[3])))?;
        let gpa = fields[4]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::malformed(format!("invalid gpa '{}'", fields[4])))?;

        Ok(Self::new(fields[0], fields[1], fields[2], semester, gpa))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | Sem {} | CGPA {:.2}",
            self.id, self.name, self.branch, self.semester, self.gpa
        )
    }
}
