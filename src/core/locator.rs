use crate::utils::error::{CheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Export files produced by the upstream system end with this suffix.
pub const EXPORT_SUFFIX: &str = "Person-export.json";

/// Explicit arguments win verbatim (nonexistent paths surface later as open
/// errors); with no arguments the working directory is scanned for exports.
pub fn locate_input_files(explicit: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    tracing::info!(
        "No file names provided, trying to find files ending with {} in current working directory.",
        EXPORT_SUFFIX
    );
    let working_dir = std::env::current_dir()?;
    discover_exports(&working_dir)
}

pub fn discover_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(EXPORT_SUFFIX) {
                matches.push(path);
            }
        }
    }

    matches.sort();

    if matches.is_empty() {
        return Err(CheckError::NoInputFilesError);
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_arguments_bypass_discovery() {
        let files = vec![PathBuf::from("does-not-exist.json")];
        let located = locate_input_files(&files).unwrap();
        assert_eq!(located, files);
    }

    #[test]
    fn discovery_selects_only_export_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("aPerson-export.json"), "").unwrap();
        std::fs::write(dir.path().join("bPerson-export.json"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("Person-export.json.bak"), "").unwrap();

        let located = discover_exports(dir.path()).unwrap();
        let names: Vec<_> = located
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["aPerson-export.json", "bPerson-export.json"]);
    }

    #[test]
    fn discovery_fails_when_nothing_matches() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let err = discover_exports(dir.path()).unwrap_err();
        assert!(matches!(err, CheckError::NoInputFilesError));
    }
}
