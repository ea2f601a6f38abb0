use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageResult;
use crate::models::{Book, User};
use crate::repositories::json::upsert;
use crate::repositories::traits::{BookRepository, UserRepository};

/// Book repository that lives only in memory.
///
/// Useful for demos and tests; everything is lost when it is dropped.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing books.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn get_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn save(&self, book: &Book) -> StorageResult<()> {
        let mut books = self.books.write().await;
        upsert(&mut *books, book.clone(), |b| b.isbn == book.isbn);
        Ok(())
    }

    async fn list_all(&self) -> StorageResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }
}

/// User repository that lives only in memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn save(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.write().await;
        upsert(&mut *users, user.clone(), |u| u.id == user.id);
        Ok(())
    }

    async fn list_all(&self) -> StorageResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
