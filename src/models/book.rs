//! Book model for the library lending system.

use serde::{Deserialize, Serialize};

/// A book in the library catalogue.
///
/// `is_borrowed` and `borrowed_by` always move together: a book is
/// borrowed exactly when it has a borrower.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub is_borrowed: bool,
    #[serde(default)]
    pub borrowed_by: Option<String>,
}

impl Book {
    /// Create an available (not borrowed) book.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            is_borrowed: false,
            borrowed_by: None,
        }
    }

    /// Mark the book as lent to `user_id`.
    pub fn lend_to(&mut self, user_id: impl Into<String>) {
        self.is_borrowed = true;
        self.borrowed_by = Some(user_id.into());
    }

    /// Clear the borrow state.
    pub fn mark_returned(&mut self) {
        self.is_borrowed = false;
        self.borrowed_by = None;
    }

    /// Whether this book is currently lent to `user_id`.
    pub fn is_borrowed_by(&self, user_id: &str) -> bool {
        self.borrowed_by.as_deref() == Some(user_id)
    }

    /// Human-readable availability, as shown by the `books` listing.
    pub fn status_label(&self) -> &'static str {
        if self.is_borrowed {
            "borrowed"
        } else {
            "available"
        }
    }
}
