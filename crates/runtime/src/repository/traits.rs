//! Repository contracts for loading and saving the account store.

use crate::accounts::AccountBook;
use crate::repository::Result;

/// Repository for account persistence.
///
/// The whole book is loaded and saved at once. Callers that modify it must
/// treat load-modify-save as one transaction (see
/// [`AccountService`](crate::accounts::AccountService)).
pub trait AccountRepository: Send + Sync {
    /// Load every account.
    fn load(&self) -> Result<AccountBook>;

    /// Replace the stored accounts with `book`.
    fn save(&self, book: &AccountBook) -> Result<()>;
}

impl<R: AccountRepository + ?Sized> AccountRepository for Box<R> {
    fn load(&self) -> Result<AccountBook> {
        (**self).load()
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        (**self).save(book)
    }
}
