//! `library` - library lending CLI and REST API server.

use anyhow::Result;
use clap::Parser;
use contact_book::cli::{run_library_command, LibraryCli};
use contact_book::observability::init_logging;
use contact_book::repositories::{
    BookRepository, JsonBookRepository, JsonUserRepository, UserRepository,
};
use contact_book::services::{LibraryService, LibraryServiceImpl};
use contact_book::Config;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = LibraryCli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    init_logging(&config, cli.debug);

    let books = Arc::new(JsonBookRepository::new(config.books_path())) as Arc<dyn BookRepository>;
    let users = Arc::new(JsonUserRepository::new(config.users_path())) as Arc<dyn UserRepository>;
    let library = Arc::new(LibraryServiceImpl::new(books, users)) as Arc<dyn LibraryService>;

    if library.ensure_default_user().await? {
        info!("Created default user");
    }

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match run_library_command(
        cli.command,
        library,
        config.api_addr,
        &mut stdout,
        &mut stderr,
    )
    .await
    {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
