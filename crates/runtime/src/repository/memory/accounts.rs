//! In-memory AccountRepository implementation for tests and local runs.

use std::sync::RwLock;

use crate::accounts::AccountBook;
use crate::repository::{AccountRepository, RepositoryError, Result};

/// In-memory implementation of AccountRepository.
///
/// Stores the account book for testing and local development.
pub struct InMemoryAccountRepo {
    book: RwLock<AccountBook>,
}

impl InMemoryAccountRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_accounts(AccountBook::default())
    }

    /// Create with pre-existing accounts.
    pub fn with_accounts(book: AccountBook) -> Self {
        Self {
            book: RwLock::new(book),
        }
    }
}

impl Default for InMemoryAccountRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for InMemoryAccountRepo {
    fn load(&self) -> Result<AccountBook> {
        let book = self.book.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(book.clone())
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        let mut stored = self
            .book
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = book.clone();
        Ok(())
    }
}
