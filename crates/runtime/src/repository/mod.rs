//! Repository layer for account data
//!
//! Repositories handle data that CHANGES between battles:
//! - Credentials (password hashes)
//! - Win/loss records
//!
//! Static content (the creature catalog) is handled by `battle-content`, not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileAccountRepository;
pub use memory::InMemoryAccountRepo;
pub use traits::AccountRepository;
