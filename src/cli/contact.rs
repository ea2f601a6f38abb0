//! The `contact` command: add, list, find, and delete contacts.

use crate::error::ContactError;
use crate::services::ContactService;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use tracing::error;

#[derive(Parser, Debug)]
#[clap(
    name = "contact",
    version = env!("CARGO_PKG_VERSION"),
    about = "Contact book manager backed by a JSON file"
)]
pub struct ContactCli {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: ContactCommand,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommand {
    /// Add a contact: contact add Alice 13800138000
    Add {
        /// Contact name (must not be blank)
        name: String,
        /// 11-digit mobile number
        phone: String,
        /// Optional email address
        #[clap(long)]
        email: Option<String>,
    },
    /// List all contacts
    List,
    /// Find a contact by exact name: contact find Alice
    Find {
        name: String,
    },
    /// Delete every contact with this name
    Delete {
        name: String,
    },
}

/// Run one contact command.
///
/// Returns `Ok(true)` on success and `Ok(false)` for user-facing failures
/// (invalid input, deleting a missing contact) that were already reported
/// on `err`. A `find` miss is an answer, not a failure.
/// Storage failures are returned as errors.
pub async fn run_contact_command(
    command: ContactCommand,
    service: &dyn ContactService,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    match command {
        ContactCommand::Add { name, phone, email } => {
            match service.add(&name, &phone, email.as_deref()).await {
                Ok(contact) => {
                    let line = format!("Added: {}", contact);
                    writeln!(out, "{}", line.green())?;
                    Ok(true)
                }
                Err(ContactError::Validation(e)) => {
                    writeln!(err, "{}", format!("Add failed: {}", e).red().bold())?;
                    Ok(false)
                }
                Err(e) => {
                    error!(error = %e, "Add contact failed");
                    Err(e.into())
                }
            }
        }
        ContactCommand::List => {
            let contacts = service.list().await?;
            if contacts.is_empty() {
                writeln!(out, "Contact book is empty")?;
                return Ok(true);
            }
            for (i, contact) in contacts.iter().enumerate() {
                writeln!(
                    out,
                    "{}. {} - {} - {}",
                    i + 1,
                    contact.name,
                    contact.phone.as_deref().unwrap_or("-"),
                    contact.email.as_deref().unwrap_or("-"),
                )?;
            }
            Ok(true)
        }
        ContactCommand::Find { name } => match service.find(&name).await? {
            Some(contact) => {
                writeln!(out, "Found: {}", contact)?;
                Ok(true)
            }
            None => {
                writeln!(out, "Not found: {}", name)?;
                let suggestions = service.suggest(&name).await?;
                if !suggestions.is_empty() {
                    let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
                    writeln!(out, "Did you mean: {}?", names.join(", "))?;
                }
                Ok(true)
            }
        },
        ContactCommand::Delete { name } => match service.delete(&name).await {
            Ok(_) => {
                writeln!(out, "{}", format!("Deleted: {}", name).green())?;
                Ok(true)
            }
            Err(ContactError::NotFound(_)) => {
                writeln!(err, "{}", format!("Contact not found: {}", name).red())?;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_email() {
        let cli = ContactCli::try_parse_from([
            "contact",
            "add",
            "Alice",
            "13800138000",
            "--email",
            "alice@example.com",
        ])
        .unwrap();

        match cli.command {
            ContactCommand::Add { name, phone, email } => {
                assert_eq!(name, "Alice");
                assert_eq!(phone, "13800138000");
                assert_eq!(email.as_deref(), Some("alice@example.com"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_debug_flag() {
        let cli = ContactCli::try_parse_from(["contact", "list", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, ContactCommand::List));
    }

    #[test]
    fn test_parse_requires_phone() {
        assert!(ContactCli::try_parse_from(["contact", "add", "Alice"]).is_err());
    }
}
