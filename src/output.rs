//! Report destination: a new file or stdout.

use crate::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Why an output path was refused before any input was read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputPathError {
    #[error("the specified output file \"{}\" already exists", .0.display())]
    Exists(PathBuf),
    #[error("the specified output directory \"{}\" does not exist", .0.display())]
    MissingParent(PathBuf),
}

/// The report must go to a file that does not exist yet, inside a directory
/// that does. A bare file name refers to the current directory.
pub fn check_output_path(path: &Path) -> std::result::Result<(), OutputPathError> {
    if path.exists() {
        return Err(OutputPathError::Exists(path.to_path_buf()));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(OutputPathError::MissingParent(parent.to_path_buf()))
        }
        _ => Ok(()),
    }
}

/// Open the destination for writing; never overwrites an existing file.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_new_file_in_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(check_output_path(&dir.path().join("out.csv")), Ok(()));
        assert_eq!(check_output_path(Path::new("not-there-yet.csv")), Ok(()));
    }

    #[test]
    fn rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        std::fs::write(&p, "x").unwrap();
        assert_eq!(check_output_path(&p), Err(OutputPathError::Exists(p.clone())));
    }

    #[test]
    fn rejects_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("nope");
        let p = parent.join("out.csv");
        assert_eq!(check_output_path(&p), Err(OutputPathError::MissingParent(parent)));
    }

    #[test]
    fn open_output_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        std::fs::write(&p, "keep").unwrap();
        assert!(open_output(Some(&p)).is_err());
        assert_eq!(std::fs::read_to_string(&p).unwrap(), "keep");
    }
}
