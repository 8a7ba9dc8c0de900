use crate::domain::model::Person;
use crate::utils::error::{CheckError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Streams Person records out of a newline-delimited JSON export file.
/// Blank lines are skipped; the first malformed line ends the run.
pub struct PersonReader {
    lines: Lines<BufReader<File>>,
    file: String,
    line_no: usize,
}

impl PersonReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            file: path.display().to_string(),
            line_no: 0,
        })
    }
}

impl Iterator for PersonReader {
    type Item = Result<Person>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|source| {
                CheckError::MalformedRecordError {
                    file: self.file.clone(),
                    line: self.line_no,
                    source,
                }
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_export(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("testPerson-export.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn yields_one_person_per_non_empty_line() {
        let dir = TempDir::new().unwrap();
        let path = write_export(
            &dir,
            "{\"family_name\":\"Doe\"}\n\n{\"family_name\":\"Roe\"}\n",
        );

        let people: Vec<Person> = PersonReader::open(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].family_name, "Doe");
        assert_eq!(people[1].family_name, "Roe");
    }

    #[test]
    fn malformed_line_reports_file_and_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_export(&dir, "{\"family_name\":\"Doe\"}\nnot json\n");

        let mut reader = PersonReader::open(&path).unwrap();
        assert!(reader.next().unwrap().is_ok());

        let err = reader.next().unwrap().unwrap_err();
        match err {
            CheckError::MalformedRecordError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn open_fails_for_missing_file() {
        assert!(PersonReader::open(Path::new("no/such/file.json")).is_err());
    }
}
