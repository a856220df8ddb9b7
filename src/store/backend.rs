//! Pluggable key-value storage behind the profile store
//!
//! The store never touches the filesystem directly; it reads and writes
//! string keys through this trait. Tests inject [`MemoryBackend`];
//! production uses [`FileBackend`], one JSON document per key under the
//! data directory.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Key-value storage for serialized records.
///
/// Keys are arbitrary UTF-8 strings; values are JSON documents. A missing
/// key reads as `None`, never as an error.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for tests
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-per-key backend rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

/// Encode a storage key into a safe file name. Alphanumerics, '-', '_' and
/// '.' pass through; every other byte becomes "%XX". The encoding is
/// injective, so distinct keys (including names differing only by case)
/// never collide.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))?;

        let path = self.path_for(key);

        // Atomic write pattern: temp file + rename, so a crash mid-write
        // never leaves a truncated record behind.
        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(value.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        temp_file
            .sync_all()
            .with_context(|| format!("Failed to sync {}", temp_path.display()))?;

        std::fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to rename into place: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_key_passthrough_and_escapes() {
        assert_eq!(encode_key("profiles"), "profiles");
        assert_eq!(encode_key("profile:alice"), "profile%3Aalice");
        assert_eq!(encode_key("profile:Ann Marie"), "profile%3AAnn%20Marie");
    }

    #[test]
    fn test_encode_key_is_case_sensitive() {
        assert_ne!(encode_key("profile:alice"), encode_key("profile:Alice"));
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
        backend.write("k", "v1").unwrap();
        backend.write("k", "v2").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut backend = FileBackend::new(dir.path());
        assert_eq!(backend.read("profile:alice").unwrap(), None);
        backend.write("profile:alice", "{\"a\":1}").unwrap();
        assert_eq!(
            backend.read("profile:alice").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        // no stray temp file left behind
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["profile%3Aalice.json".to_string()]);
    }
}
