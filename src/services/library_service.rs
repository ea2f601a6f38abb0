//! Library lending service.
//!
//! Business rules for cataloguing books and lending them to users. Storage
//! is reached only through the repository traits, so the same rules run
//! over JSON files or in-memory stores.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, User};
use crate::repositories::{BookRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Id of the user created on first start.
pub const DEFAULT_USER_ID: &str = "u1";

/// Name of the user created on first start.
pub const DEFAULT_USER_NAME: &str = "Alice";

/// Library service trait for lending operations.
#[async_trait]
pub trait LibraryService: Send + Sync {
    /// Catalogue a new book. ISBN, title and author must be non-blank and
    /// the ISBN must be unused.
    async fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<Book>;

    /// Look up a book by ISBN.
    async fn get_book(&self, isbn: &str) -> LibraryResult<Option<Book>>;

    /// All catalogued books.
    async fn list_books(&self) -> LibraryResult<Vec<Book>>;

    /// Lend an available book to an existing user.
    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Book>;

    /// Return a borrowed book to the shelf.
    async fn return_book(&self, isbn: &str) -> LibraryResult<Book>;

    /// Books currently lent to `user_id` (empty for unknown users).
    async fn get_user_books(&self, user_id: &str) -> LibraryResult<Vec<Book>>;

    /// Register (or rename) a user.
    async fn add_user(&self, id: &str, name: &str) -> LibraryResult<User>;

    /// Look up a user by id.
    async fn get_user(&self, id: &str) -> LibraryResult<Option<User>>;

    /// Create the default user if it does not exist yet.
    ///
    /// Returns true when the user was created.
    async fn ensure_default_user(&self) -> LibraryResult<bool>;
}

/// Default implementation of LibraryService.
pub struct LibraryServiceImpl {
    books: Arc<dyn BookRepository>,
    users: Arc<dyn UserRepository>,
    // Serializes read-modify-write sequences within this process.
    write_lock: Mutex<()>,
}

impl LibraryServiceImpl {
    pub fn new(books: Arc<dyn BookRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            books,
            users,
            write_lock: Mutex::new(()),
        }
    }

    fn require(field: &str, value: &str) -> LibraryResult<String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(LibraryError::InvalidInput(format!("{} cannot be empty", field)));
        }
        Ok(value.to_string())
    }

    async fn existing_book(&self, isbn: &str) -> LibraryResult<Book> {
        self.books
            .get_by_isbn(isbn)
            .await?
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<Book> {
        let isbn = Self::require("ISBN", isbn)?;
        let title = Self::require("Title", title)?;
        let author = Self::require("Author", author)?;

        let _guard = self.write_lock.lock().await;
        if self.books.get_by_isbn(&isbn).await?.is_some() {
            warn!(isbn = %isbn, "Duplicate ISBN rejected");
            return Err(LibraryError::DuplicateBook(isbn));
        }

        let book = Book::new(isbn, title, author);
        self.books.save(&book).await?;
        info!(isbn = %book.isbn, title = %book.title, "Book added");
        Ok(book)
    }

    async fn get_book(&self, isbn: &str) -> LibraryResult<Option<Book>> {
        Ok(self.books.get_by_isbn(isbn).await?)
    }

    async fn list_books(&self) -> LibraryResult<Vec<Book>> {
        Ok(self.books.list_all().await?)
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Book> {
        let _guard = self.write_lock.lock().await;

        let mut book = self.existing_book(isbn).await?;
        if self.users.get_by_id(user_id).await?.is_none() {
            warn!(isbn, user_id, "Borrow by unknown user");
            return Err(LibraryError::UserNotFound(user_id.to_string()));
        }
        if book.is_borrowed {
            let borrower = book.borrowed_by.clone().unwrap_or_else(|| "unknown".to_string());
            warn!(isbn, user_id, borrower = %borrower, "Book already borrowed");
            return Err(LibraryError::AlreadyBorrowed {
                isbn: isbn.to_string(),
                borrower,
            });
        }

        book.lend_to(user_id);
        self.books.save(&book).await?;
        info!(isbn, user_id, "Book borrowed");
        Ok(book)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<Book> {
        let _guard = self.write_lock.lock().await;

        let mut book = self.existing_book(isbn).await?;
        if !book.is_borrowed {
            warn!(isbn, "Return of a book that is not borrowed");
            return Err(LibraryError::NotBorrowed(isbn.to_string()));
        }

        book.mark_returned();
        self.books.save(&book).await?;
        info!(isbn, "Book returned");
        Ok(book)
    }

    async fn get_user_books(&self, user_id: &str) -> LibraryResult<Vec<Book>> {
        let books = self.books.list_all().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.is_borrowed_by(user_id))
            .collect())
    }

    async fn add_user(&self, id: &str, name: &str) -> LibraryResult<User> {
        let user = User::new(Self::require("User id", id)?, Self::require("User name", name)?);

        let _guard = self.write_lock.lock().await;
        self.users.save(&user).await?;
        info!(user_id = %user.id, name = %user.name, "User saved");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> LibraryResult<Option<User>> {
        Ok(self.users.get_by_id(id).await?)
    }

    async fn ensure_default_user(&self) -> LibraryResult<bool> {
        let _guard = self.write_lock.lock().await;
        if self.users.get_by_id(DEFAULT_USER_ID).await?.is_some() {
            return Ok(false);
        }

        self.users
            .save(&User::new(DEFAULT_USER_ID, DEFAULT_USER_NAME))
            .await?;
        info!(user_id = DEFAULT_USER_ID, "Default user created");
        Ok(true)
    }
}
