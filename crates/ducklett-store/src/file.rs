use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{KeyValueStore, Result};

/// Key-value store backed by one flat JSON object file.
///
/// The whole map is cached in memory and rewritten on every change through a
/// temp file + rename, so a crash mid-write leaves the previous file intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// An unreadable file is treated as empty and gets replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = std::fs::read(&path)?;
            match serde_json::from_slice::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "storage file is corrupt, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "opened storage");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::open(temp_dir.path().join("storage.json"))?;

        assert_eq!(store.get("anything")?, None);
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path)?;
        store.set("ducklettTheme", "dark")?;
        store.set("other", "1")?;
        store.remove("other")?;

        let reopened = FileStore::open(&path)?;
        assert_eq!(reopened.get("ducklettTheme")?, Some("dark".to_string()));
        assert_eq!(reopened.get("other")?, None);
        assert!(!path.with_extension("json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_last_write_wins() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("storage.json");

        let mut store = FileStore::open(&path)?;
        store.set("key", "first")?;
        store.set("key", "second")?;

        assert_eq!(FileStore::open(&path)?.get("key")?, Some("second".to_string()));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_is_replaced() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{not json")?;

        let mut store = FileStore::open(&path)?;
        assert_eq!(store.get("ducklettTheme")?, None);

        store.set("ducklettTheme", "light")?;
        let content = std::fs::read_to_string(&path)?;
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content)?;
        assert_eq!(parsed.get("ducklettTheme").map(String::as_str), Some("light"));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_file_starts_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, b'{', b'}'])?;

        let mut store = FileStore::open(&path)?;
        assert_eq!(store.get("ducklettAppointment")?, None);

        store.set("ducklettTheme", "dark")?;
        let reopened = FileStore::open(&path)?;
        assert_eq!(reopened.get("ducklettTheme")?, Some("dark".to_string()));
        Ok(())
    }
}
