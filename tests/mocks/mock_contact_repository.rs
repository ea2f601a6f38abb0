use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the contact list in memory, counts calls per method, and can be
/// switched into a mode where every save fails.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_saves: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a repository pre-loaded with contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    /// Snapshot of the stored contacts.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent `save_all` fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn load_all(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("load_all");
        Ok(self.stored())
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> StorageResult<()> {
        self.track_call("save_all");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock://contacts.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.contacts.lock().unwrap() = contacts;
        Ok(())
    }
}
