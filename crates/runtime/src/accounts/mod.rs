//! Account management: credentials, the account book, and the service that
//! reads and writes it through an [`AccountRepository`](crate::repository::AccountRepository).

mod book;
mod credentials;
mod error;
mod service;

pub use book::{Account, AccountBook};
pub use credentials::{hash_password, verify_password};
pub use error::AccountError;
pub use service::AccountService;
