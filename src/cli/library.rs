//! The `library` command: catalogue books, lend them out, and serve the REST API.

use crate::error::LibraryError;
use crate::server::{self, ApiState};
use crate::services::{LibraryService, DEFAULT_USER_ID};
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(
    name = "library",
    version = env!("CARGO_PKG_VERSION"),
    about = "Small library lending system backed by JSON files"
)]
pub struct LibraryCli {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: LibraryCommand,
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// Add a book to the catalogue
    AddBook {
        isbn: String,
        title: String,
        author: String,
    },
    /// Borrow a book
    Borrow {
        isbn: String,
        /// Borrowing user id
        #[clap(long, default_value = DEFAULT_USER_ID)]
        user: String,
    },
    /// Return a borrowed book
    Return {
        isbn: String,
    },
    /// List every book with its availability
    Books,
    /// List the books a user has borrowed
    UserBooks {
        #[clap(long, default_value = DEFAULT_USER_ID)]
        user: String,
    },
    /// Register a user, or rename an existing one
    AddUser {
        id: String,
        name: String,
    },
    /// Serve the REST API
    Serve {
        /// Bind address (overrides LIBRARY_API_ADDR)
        #[clap(long)]
        addr: Option<SocketAddr>,
    },
}

fn report(err: &mut dyn Write, e: &LibraryError) -> Result<bool> {
    writeln!(err, "{}", e.to_string().red())?;
    Ok(false)
}

/// Run one library command.
///
/// Lending rule violations are printed to `err` and yield `Ok(false)`;
/// storage failures propagate as errors. `Serve` blocks until shutdown.
pub async fn run_library_command(
    command: LibraryCommand,
    library: Arc<dyn LibraryService>,
    default_addr: SocketAddr,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    match command {
        LibraryCommand::AddBook { isbn, title, author } => {
            match library.add_book(&isbn, &title, &author).await {
                Ok(book) => {
                    writeln!(out, "{}", format!("Added book: {}", book.title).green())?;
                    Ok(true)
                }
                Err(LibraryError::Storage(e)) => Err(e.into()),
                Err(e) => report(err, &e),
            }
        }
        LibraryCommand::Borrow { isbn, user } => match library.borrow_book(&isbn, &user).await {
            Ok(book) => {
                let borrower = library
                    .get_user(&user)
                    .await?
                    .map(|u| u.name)
                    .unwrap_or(user);
                writeln!(
                    out,
                    "{}",
                    format!("{} borrowed {}", borrower, book.title).green()
                )?;
                Ok(true)
            }
            Err(LibraryError::Storage(e)) => Err(e.into()),
            Err(e) => report(err, &e),
        },
        LibraryCommand::Return { isbn } => match library.return_book(&isbn).await {
            Ok(book) => {
                writeln!(out, "{}", format!("Returned {}", book.title).green())?;
                Ok(true)
            }
            Err(LibraryError::Storage(e)) => Err(e.into()),
            Err(e) => report(err, &e),
        },
        LibraryCommand::Books => {
            let books = library.list_books().await?;
            if books.is_empty() {
                writeln!(out, "The library is empty")?;
                return Ok(true);
            }
            for book in books {
                let borrower = book
                    .borrowed_by
                    .as_deref()
                    .map(|id| format!(" -> {}", id))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}{}",
                    book.isbn,
                    book.title,
                    book.author,
                    book.status_label(),
                    borrower
                )?;
            }
            Ok(true)
        }
        LibraryCommand::UserBooks { user } => {
            let Some(found) = library.get_user(&user).await? else {
                return report(err, &LibraryError::UserNotFound(user));
            };
            let books = library.get_user_books(&user).await?;
            if books.is_empty() {
                writeln!(out, "{} has not borrowed any books", found.name)?;
            } else {
                writeln!(out, "Books borrowed by {}:", found.name)?;
                for book in books {
                    writeln!(out, "{}\t{}\t{}", book.isbn, book.title, book.author)?;
                }
            }
            Ok(true)
        }
        LibraryCommand::AddUser { id, name } => match library.add_user(&id, &name).await {
            Ok(user) => {
                writeln!(out, "{}", format!("Saved user {} ({})", user.id, user.name).green())?;
                Ok(true)
            }
            Err(LibraryError::Storage(e)) => Err(e.into()),
            Err(e) => report(err, &e),
        },
        LibraryCommand::Serve { addr } => {
            let addr = addr.unwrap_or(default_addr);
            writeln!(out, "Serving library API on http://{}", addr)?;
            out.flush()?;
            server::run_server(addr, ApiState::new(library)).await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_defaults_to_default_user() {
        let cli = LibraryCli::try_parse_from(["library", "borrow", "978-1"]).unwrap();
        match cli.command {
            LibraryCommand::Borrow { isbn, user } => {
                assert_eq!(isbn, "978-1");
                assert_eq!(user, "u1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_addr() {
        let cli =
            LibraryCli::try_parse_from(["library", "serve", "--addr", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            LibraryCommand::Serve { addr } => assert_eq!(addr.map(|a| a.port()), Some(9000)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_kebab_case_subcommands() {
        assert!(LibraryCli::try_parse_from(["library", "add-book", "1", "T", "A"]).is_ok());
        assert!(LibraryCli::try_parse_from(["library", "user-books", "--user", "u2"]).is_ok());
        assert!(LibraryCli::try_parse_from(["library", "add-user", "u2", "Bob"]).is_ok());
    }
}
