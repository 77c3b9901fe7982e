// file: src/utils/validation.rs
// description: input validation for command line arguments
// reference: input validation patterns

use crate::error::{ReviewError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Reads a text file, replacing invalid UTF-8 rather than failing;
    /// extracted resume text often carries binary artifacts.
    pub fn read_text_file(path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(ReviewError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).map_err(|source| ReviewError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn validate_identifier(kind: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ReviewError::Validation(format!("{} cannot be empty", kind)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_read_text_file_lossy() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Jane Doe\n\xff\xfejane@x.io\n").unwrap();

        let text = Validator::read_text_file(file.path()).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("jane@x.io"));
    }

    #[test]
    fn test_read_text_file_rejects_directory() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Validator::read_text_file(dir.path()),
            Err(ReviewError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_identifier() {
        assert!(Validator::validate_identifier("user id", "u-1").is_ok());
        assert!(Validator::validate_identifier("user id", "  ").is_err());
    }
}
