//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use rcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{RcgenError, RcgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> RcgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir(&self, path: &Path) -> RcgenResult<()> {
        trace!(path = %path.display(), "create_dir");
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RcgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    /// Does not follow symlinks, so a dangling link still counts as present.
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_builds_parents() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = temp.path().join("a").join("b").join("c");

        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
    }

    #[test]
    fn create_dir_fails_when_present() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("Badge");

        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();

        assert!(matches!(
            err,
            RcgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn write_file_into_missing_dir_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("missing").join("index.ts");

        match fs.write_file(&file, "x").unwrap_err() {
            RcgenError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_present() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let link = temp.path().join("Badge");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

        assert!(fs.exists(&link));
        assert!(!fs.exists(&temp.path().join("other")));
    }

    #[test]
    fn write_file_round_trips_content() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("cn.ts");

        fs.write_file(&file, "export {};\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "export {};\n");
    }
}
