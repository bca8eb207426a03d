//! In-memory file system for unit tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Clone, Default)]
pub struct MemoryFs {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<HashSet<PathBuf>>>,
    /// Writes to these paths fail with a permission error
    pub read_only: Arc<Mutex<HashSet<PathBuf>>>,
    /// Reads of these paths fail even though they exist
    pub unreadable: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_vec());
        self
    }

    pub fn deny_writes_to(&self, path: impl Into<PathBuf>) {
        self.read_only.lock().unwrap().insert(path.into());
    }

    pub fn deny_reads_from(&self, path: impl Into<PathBuf>) {
        self.unreadable.lock().unwrap().insert(path.into());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        if self.unreadable.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        self.write(to, &content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}
