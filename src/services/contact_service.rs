//! Contact service layer.
//!
//! Each operation loads the whole contact list, applies one list operation,
//! and (for mutations) writes the whole list back.

use crate::contacts;
use crate::error::{ContactError, ContactResult};
use crate::matching::{ContactMatcher, Suggestion};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Maximum number of "did you mean" names returned by `suggest`.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum confidence for a name to be suggested.
const SUGGESTION_THRESHOLD: u8 = 40;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate and append a contact, then persist the list.
    async fn add(&self, name: &str, phone: &str, email: Option<&str>) -> ContactResult<Contact>;

    /// Every stored contact, in insertion order.
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// First contact with exactly this name.
    async fn find(&self, name: &str) -> ContactResult<Option<Contact>>;

    /// Remove all contacts with this name.
    ///
    /// Returns the number removed, or `ContactError::NotFound` (without
    /// touching the file) when none match.
    async fn delete(&self, name: &str) -> ContactResult<usize>;

    /// Names similar to `query`, best first.
    async fn suggest(&self, query: &str) -> ContactResult<Vec<Suggestion>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    matcher: ContactMatcher,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            matcher: ContactMatcher::new(),
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add(&self, name: &str, phone: &str, email: Option<&str>) -> ContactResult<Contact> {
        info!(name, phone, "Add contact requested");

        let mut all = self.repository.load_all().await?;
        let added = contacts::push_contact(&mut all, name, phone, email)?;

        self.repository.save_all(all).await?;
        Ok(added)
    }

    async fn list(&self) -> ContactResult<Vec<Contact>> {
        let all = self.repository.load_all().await?;
        if all.is_empty() {
            warn!("Contact book is empty");
        }
        Ok(all)
    }

    async fn find(&self, name: &str) -> ContactResult<Option<Contact>> {
        info!(name, "Find contact requested");
        let all = self.repository.load_all().await?;
        Ok(contacts::find_contact(&all, name).cloned())
    }

    async fn delete(&self, name: &str) -> ContactResult<usize> {
        info!(name, "Delete contact requested");

        let all = self.repository.load_all().await?;
        if !contacts::contains_contact(&all, name) {
            warn!(name, "Delete target not found");
            return Err(ContactError::NotFound(name.to_string()));
        }

        let before = all.len();
        let remaining = contacts::delete_contact(all, name);
        let removed = before - remaining.len();

        self.repository.save_all(remaining).await?;
        Ok(removed)
    }

    async fn suggest(&self, query: &str) -> ContactResult<Vec<Suggestion>> {
        let all = self.repository.load_all().await?;
        Ok(self
            .matcher
            .suggest(query, &all, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD))
    }
}
