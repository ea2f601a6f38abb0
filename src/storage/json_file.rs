use crate::error::{StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load every record from a JSON array file.
///
/// A missing file is treated as an empty collection (first run). Any other
/// I/O failure, or contents that are not a JSON array of `T`, is an error.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
    debug!(path = %path.display(), "Loading records");

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Data file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a JSON array file with `records`.
///
/// The parent directory is created if needed. Output is pretty-printed with
/// two-space indentation and keeps non-ASCII text as UTF-8.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> StorageResult<()> {
    debug!(path = %path.display(), count = records.len(), "Saving records");

    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut text = serde_json::to_string_pretty(records).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');

    fs::write(path, text).map_err(io_err)
}

/// A handle on one JSON data file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// See [`load_records`].
    pub fn load<T: DeserializeOwned>(&self) -> StorageResult<Vec<T>> {
        load_records(&self.path)
    }

    /// See [`save_records`].
    pub fn save<T: Serialize>(&self, records: &[T]) -> StorageResult<()> {
        save_records(&self.path, records)
    }

    /// Run a blocking load on the tokio blocking pool.
    pub async fn load_async<T>(&self) -> StorageResult<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let file = self.clone();
        tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| self.join_error(e))?
    }

    /// Run a blocking save on the tokio blocking pool.
    pub async fn save_async<T>(&self, records: Vec<T>) -> StorageResult<()>
    where
        T: Serialize + Send + 'static,
    {
        let file = self.clone();
        tokio::task::spawn_blocking(move || file.save(&records))
            .await
            .map_err(|e| self.join_error(e))?
    }

    fn join_error(&self, e: tokio::task::JoinError) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source: std::io::Error::other(format!("Task join error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let records: Vec<Contact> = load_records(&dir.path().join("absent.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/contacts.json");

        save_records(&path, &[Contact::new("Alice", "13800138000")]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_keeps_unicode_and_indents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        save_records(&path, &[Contact::new("张三", "13829899843")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"张三\""));
        assert!(text.contains("\n  {\n    \"name\""));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result: StorageResult<Vec<Contact>> = load_records(&path);
        assert!(matches!(result, Err(StorageError::Json { .. })));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("contacts.json"));

        file.save(&[
            Contact::new("Alice", "13800138000"),
            Contact::new("Bob", "13900139000"),
        ])
        .unwrap();
        file.save(&[Contact::new("Carol", "15000150000")]).unwrap();

        let loaded: Vec<Contact> = file.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Carol");
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let dir = tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("contacts.json"));
        let contacts = vec![Contact::new("Alice", "13800138000").with_email("a@example.com")];

        file.save_async(contacts.clone()).await.unwrap();
        let loaded: Vec<Contact> = file.load_async().await.unwrap();

        assert_eq!(loaded, contacts);
    }
}
