//! Shared test doubles for the FileSystem boundary
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use drush::infrastructure::FileSystem;

/// In-memory file store that counts reads, for memoization tests.
/// Files can be added after construction to simulate recovery from a
/// failed read.
#[derive(Default)]
pub struct CountingFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    reads: AtomicUsize,
}

impl CountingFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(path: impl Into<PathBuf>, content: &str) -> Self {
        let fs = Self::new();
        fs.add_file(path, content);
        fs
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl FileSystem for CountingFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

/// Filesystem whose `create_dir_all` fails under configured prefixes
/// (simulating a read-only home, a full disk etc.) and records every
/// successful creation, so tests can assert short-circuiting.
#[derive(Default)]
pub struct ProbeFileSystem {
    denied: Vec<PathBuf>,
    created: Mutex<Vec<PathBuf>>,
}

impl ProbeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.denied.push(prefix.into());
        self
    }

    pub fn created(&self) -> Vec<PathBuf> {
        self.created.lock().unwrap().clone()
    }
}

impl FileSystem for ProbeFileSystem {
    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.denied.iter().any(|prefix| path.starts_with(prefix)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        self.created.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}
