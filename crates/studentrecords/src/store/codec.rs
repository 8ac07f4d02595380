//! Whole-file text form of the table.
//!
//! One record per line, fields in the order `id,name,branch,semester,gpa`,
//! no header and no escaping.

use std::path::Path;

use crate::error::{Error, Result};
use crate::student::Student;

/// Parse the full contents of a backing file.
///
/// Blank lines are skipped. Records are returned in file order, duplicates
/// included; deciding which duplicate wins is left to the caller.
///
/// # Errors
///
/// Returns [`Error::Load`] for the first line that does not parse. No
/// records are returned in that case.
pub fn parse_table(text: &str, path: &Path) -> Result<Vec<Student>> {
    let mut students = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let student = line.parse::<Student>().map_err(|err| Error::Load {
            path: path.to_path_buf(),
            line: index + 1,
            reason: match err {
                Error::MalformedRecord(reason) => reason,
                other => other.to_string(),
            },
        })?;
        students.push(student);
    }

    Ok(students)
}

/// Render records as backing-file text, one newline-terminated line each.
#[must_use]
pub fn render_table<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let mut out = String::new();
    for student in students {
        out.push_str(&student.to_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path() -> &'static Path {
        Path::new("students.csv")
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_table("", path()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\nS1,Ana,CS,3,8.5\n   \n\nS2,Ravi,EE,1,7\n";
        let students = parse_table(text, path()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, "S1");
        assert_eq!(students[1].id, "S2");
    }

    #[test]
    fn test_parse_handles_crlf() {
        let text = "S1,Ana,CS,3,8.5\r\nS2,Ravi,EE,1,7\r\n";
        let students = parse_table(text, path()).unwrap();
        assert_eq!(students[1].gpa.to_string(), "7");
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let text = "S1,Ana,CS,3,8.5\nS1,Ana,CS,4,8.7\n";
        let students = parse_table(text, path()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].semester, 4);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let text = "S1,Ana,CS,3,8.5\n\nS2,Ravi,EE,1\n";
        let err = parse_table(text, path()).unwrap_err();
        match err {
            Error::Load { path, line, reason } => {
                assert_eq!(path, Path::new("students.csv"));
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 5 fields, found 4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_table() {
        let students = vec![
            Student::new("S1", "Ana", "CS", 3, 8.5),
            Student::new("S2", "Ravi", "EE", 1, 9.25),
        ];
        assert_eq!(
            render_table(&students),
            "S1,Ana,CS,3,8.5\nS2,Ravi,EE,1,9.25\n"
        );
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&Vec::<Student>::new()), "");
    }

    #[test]
    fn test_render_then_parse_preserves_records() {
        let students = vec![
            Student::new("A7", "Zoë Ödegaard", "Design", 2, 6.125),
            Student::new("B2", "", "", -1, 0.0),
        ];
        let parsed = parse_table(&render_table(&students), path()).unwrap();
        assert_eq!(parsed, students);
    }
}
