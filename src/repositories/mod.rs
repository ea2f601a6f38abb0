mod in_memory;
mod json;
mod traits;

pub use in_memory::{InMemoryBookRepository, InMemoryUserRepository};
pub use json::{JsonBookRepository, JsonContactRepository, JsonUserRepository};
pub use traits::{BookRepository, ContactRepository, UserRepository};
