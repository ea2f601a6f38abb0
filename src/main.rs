//! `contact` - command-line contact book.

use anyhow::Result;
use clap::Parser;
use contact_book::cli::{run_contact_command, ContactCli};
use contact_book::observability::init_logging;
use contact_book::repositories::{ContactRepository, JsonContactRepository};
use contact_book::{Config, ContactServiceImpl};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = ContactCli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    init_logging(&config, cli.debug);
    debug!(path = %config.contacts_path().display(), "Using contact file");

    let repository =
        Arc::new(JsonContactRepository::new(config.contacts_path())) as Arc<dyn ContactRepository>;
    let service = ContactServiceImpl::new(repository);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match run_contact_command(cli.command, &service, &mut stdout, &mut stderr).await {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
