use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::StorageResult;
use crate::models::{Book, Contact, User};
use crate::repositories::traits::{BookRepository, ContactRepository, UserRepository};
use crate::storage::JsonFile;

/// Contact repository backed by a JSON array file.
pub struct JsonContactRepository {
    file: JsonFile,
}

impl JsonContactRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl ContactRepository for JsonContactRepository {
    async fn load_all(&self) -> StorageResult<Vec<Contact>> {
        self.file.load_async().await
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> StorageResult<()> {
        self.file.save_async(contacts).await
    }
}

/// Book repository backed by a JSON array file.
///
/// Every call re-reads the file, and `save` rewrites all of it.
pub struct JsonBookRepository {
    file: JsonFile,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn get_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>> {
        let books: Vec<Book> = self.file.load_async().await?;
        Ok(books.into_iter().find(|b| b.isbn == isbn))
    }

    async fn save(&self, book: &Book) -> StorageResult<()> {
        let mut books: Vec<Book> = self.file.load_async().await?;
        upsert(&mut books, book.clone(), |b| b.isbn == book.isbn);
        self.file.save_async(books).await
    }

    async fn list_all(&self) -> StorageResult<Vec<Book>> {
        self.file.load_async().await
    }
}

/// User repository backed by a JSON array file.
pub struct JsonUserRepository {
    file: JsonFile,
}

impl JsonUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<User>> {
        let users: Vec<User> = self.file.load_async().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn save(&self, user: &User) -> StorageResult<()> {
        let mut users: Vec<User> = self.file.load_async().await?;
        upsert(&mut users, user.clone(), |u| u.id == user.id);
        self.file.save_async(users).await
    }

    async fn list_all(&self) -> StorageResult<Vec<User>> {
        self.file.load_async().await
    }
}

/// Replace the first record matching `same_key` in place, or append.
pub(crate) fn upsert<T>(records: &mut Vec<T>, record: T, same_key: impl Fn(&T) -> bool) {
    match records.iter_mut().find(|r| same_key(r)) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_book_save_replaces_by_isbn() {
        let dir = tempdir().unwrap();
        let repo = JsonBookRepository::new(dir.path().join("books.json"));

        repo.save(&Book::new("1", "First", "A")).await.unwrap();
        repo.save(&Book::new("2", "Second", "B")).await.unwrap();

        let mut lent = Book::new("1", "First", "A");
        lent.lend_to("u1");
        repo.save(&lent).await.unwrap();

        let books = repo.list_all().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].isbn, "1");
        assert!(books[0].is_borrowed);
        assert_eq!(repo.get_by_isbn("2").await.unwrap().unwrap().title, "Second");
        assert!(repo.get_by_isbn("3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_repository_round_trip() {
        let dir = tempdir().unwrap();
        let repo = JsonUserRepository::new(dir.path().join("users.json"));

        assert!(repo.get_by_id("u1").await.unwrap().is_none());
        repo.save(&User::new("u1", "Alice")).await.unwrap();

        assert_eq!(
            repo.get_by_id("u1").await.unwrap(),
            Some(User::new("u1", "Alice"))
        );
    }

    #[tokio::test]
    async fn test_contact_repository_empty_when_missing() {
        let dir = tempdir().unwrap();
        let repo = JsonContactRepository::new(dir.path().join("contacts.json"));
        assert!(repo.load_all().await.unwrap().is_empty());
    }
}
