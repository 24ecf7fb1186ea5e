//! File system capability trait
//!
//! All file access in the library core goes through [`FileSystem`] so the
//! switch rules and the manifest editor can be exercised against an
//! in-memory double. `LocalFs` is the production implementation.

use crate::error::DunemateResult;
use std::path::Path;

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content
    fn read_to_string(&self, path: &Path) -> DunemateResult<String>;

    /// Write file content atomically
    fn write_atomic(&self, path: &Path, content: &str) -> DunemateResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> DunemateResult<()>;
}

/// Local file system implementation
///
/// Writes go through a tempfile in the destination directory followed by a
/// rename, so readers never observe a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> DunemateResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> DunemateResult<()> {
        use std::io::Write;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        // Tempfile must live in the destination directory: rename is only
        // atomic within one filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> DunemateResult<()> {
        Ok(std::fs::create_dir_all(path)?)
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    >,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with content (empty string is fine for existence-only tests)
    pub fn touch(&self, path: &str) -> &Self {
        self.files
            .lock()
            .unwrap()
            .insert(std::path::PathBuf::from(path), String::new());
        self
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(std::path::Path::new(path))
            .cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> DunemateResult<String> {
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            crate::error::DunemateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> DunemateResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> DunemateResult<()> {
        Ok(())
    }
}
