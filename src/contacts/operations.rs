use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::error::ContactResult;
use crate::models::Contact;
use tracing::{info, warn};

/// Validated input for a new contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: ContactName,
    pub phone: PhoneNumber,
    pub email: Option<EmailAddress>,
}

impl NewContact {
    /// Validate raw user input.
    ///
    /// A blank email is treated as "no email".
    pub fn parse(name: &str, phone: &str, email: Option<&str>) -> ContactResult<Self> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone)?;
        let email = email
            .filter(|e| !e.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()?;
        Ok(Self { name, phone, email })
    }

    fn into_contact(self) -> Contact {
        let contact = Contact::new(self.name.into_inner(), self.phone.into_inner());
        match self.email {
            Some(email) => contact.with_email(email.into_inner()),
            None => contact,
        }
    }
}

/// Append a new contact after validating its fields.
///
/// Duplicate names are allowed; lookups return the first match.
pub fn add_contact(
    mut contacts: Vec<Contact>,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> ContactResult<Vec<Contact>> {
    push_contact(&mut contacts, name, phone, email)?;
    Ok(contacts)
}

/// Validate and append a contact in place, returning the stored record.
///
/// The list is left untouched when validation fails.
pub fn push_contact(
    contacts: &mut Vec<Contact>,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> ContactResult<Contact> {
    let contact = NewContact::parse(name, phone, email)
        .inspect_err(|e| {
            warn!(name, phone, error = %e, "Rejected invalid contact");
        })?
        .into_contact();

    contacts.push(contact.clone());
    info!(name, phone, total = contacts.len(), "Contact added");
    Ok(contact)
}

/// Find the first contact whose name matches exactly.
pub fn find_contact<'a>(contacts: &'a [Contact], name: &str) -> Option<&'a Contact> {
    let found = contacts.iter().find(|c| c.name == name);
    match found {
        Some(contact) => info!(name, phone = ?contact.phone, "Contact found"),
        None => info!(name, "Contact not found"),
    }
    found
}

/// Whether any contact has this exact name.
pub fn contains_contact(contacts: &[Contact], name: &str) -> bool {
    contacts.iter().any(|c| c.name == name)
}

/// Remove every contact with this name, keeping the rest in order.
pub fn delete_contact(contacts: Vec<Contact>, name: &str) -> Vec<Contact> {
    let before = contacts.len();
    let remaining: Vec<Contact> = contacts.into_iter().filter(|c| c.name != name).collect();
    info!(name, removed = before - remaining.len(), "Delete applied");
    remaining
}
