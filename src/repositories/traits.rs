use crate::error::StorageResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for the contact list.
///
/// The contact book is always handled as a whole list: services load it,
/// change it in memory, and save it back.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Load every stored contact. A store that does not exist yet is empty.
    async fn load_all(&self) -> StorageResult<Vec<Contact>>;

    /// Replace the stored contacts with `contacts`.
    async fn save_all(&self, contacts: Vec<Contact>) -> StorageResult<()>;
}

/// Repository for the book catalogue, keyed by ISBN.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Retrieve a single book by ISBN.
    async fn get_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>>;

    /// Insert a book, or replace the one with the same ISBN.
    async fn save(&self, book: &Book) -> StorageResult<()>;

    /// All books in insertion order.
    async fn list_all(&self) -> StorageResult<Vec<Book>>;
}

/// Repository for library users, keyed by user id.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Retrieve a single user by id.
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<User>>;

    /// Insert a user, or replace the one with the same id.
    async fn save(&self, user: &User) -> StorageResult<()>;

    /// All users in insertion order.
    async fn list_all(&self) -> StorageResult<Vec<User>>;
}
