//! Filesystem helpers used around the pipeline.

use crate::{PdfSplitError, Result};
use std::path::{Path, PathBuf};

/// Validate that `path` exists and is a directory.
///
/// # Errors
///
/// Returns `PdfSplitError::Validation` if the path is missing or not a directory.
pub fn validate_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PdfSplitError::validation(format!(
            "Directory does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(PdfSplitError::validation(format!(
            "Path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Create `path` and all missing parents.
///
/// # Errors
///
/// Returns `PdfSplitError::Io` for I/O errors.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
    std::fs::create_dir_all(path.as_ref()).map_err(PdfSplitError::Io)
}

/// List regular files directly under `dir` (no recursion) matching `filter`.
///
/// Results are sorted by path so runs over the same directory are reproducible.
///
/// # Errors
///
/// Returns `PdfSplitError::Validation` if `dir` is not a directory, or
/// `PdfSplitError::Io` if it cannot be read.
pub fn list_files<F>(dir: impl AsRef<Path>, filter: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let dir = dir.as_ref();
    validate_directory(dir)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(PdfSplitError::Io)? {
        let entry = entry.map_err(PdfSplitError::Io)?;
        let path = entry.path();

        if path.is_file() && filter(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// List files directly under `dir` whose extension is exactly `extension`.
///
/// The comparison is case-sensitive: with `extension = "pdf"`, `report.PDF` is not matched.
pub fn find_files_by_extension(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    list_files(dir, |path: &Path| {
        path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == extension)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_validate_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        File::create(&file_path).unwrap();

        assert!(validate_directory(dir.path()).is_ok());
        assert!(matches!(
            validate_directory(&file_path),
            Err(PdfSplitError::Validation { .. })
        ));
        assert!(validate_directory(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_ensure_directory_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        ensure_directory(&nested).unwrap();
    }

    #[test]
    fn test_find_files_is_not_recursive() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("file1.pdf")).unwrap();
        File::create(dir.path().join("file2.txt")).unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        File::create(dir.path().join("subdir").join("file3.pdf")).unwrap();

        let files = find_files_by_extension(dir.path(), "pdf").unwrap();
        assert_eq!(files, vec![dir.path().join("file1.pdf")]);
    }

    #[test]
    fn test_find_files_is_case_sensitive_and_sorted() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("b.pdf")).unwrap();
        File::create(dir.path().join("a.pdf")).unwrap();
        File::create(dir.path().join("c.PDF")).unwrap();

        let files = find_files_by_extension(dir.path(), "pdf").unwrap();
        assert_eq!(files, vec![dir.path().join("a.pdf"), dir.path().join("b.pdf")]);
    }

    #[test]
    fn test_directory_named_like_pdf_is_skipped() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let files = find_files_by_extension(dir.path(), "pdf").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_files_not_a_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        File::create(&file_path).unwrap();

        assert!(list_files(&file_path, |_| true).is_err());
    }
}
