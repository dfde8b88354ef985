//! Account operations over a repository.

use std::sync::{Mutex, MutexGuard};

use battle_core::{AccountName, BattleOutcome, Record, RecordUpdate, apply_outcome};

use super::{Account, AccountError, hash_password, verify_password};
use crate::repository::{AccountRepository, RepositoryError};

/// Registration, login, statistics, and result recording.
///
/// Every mutation is a load-modify-save sequence run while holding a
/// service-wide write lock, so two battles finishing at once cannot lose
/// each other's updates.
pub struct AccountService<R> {
    repository: R,
    write_lock: Mutex<()>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a new account.
    ///
    /// The username is trimmed; it must be non-empty and unused. The password
    /// must match its confirmation and be non-empty.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<AccountName, AccountError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AccountError::EmptyUsername);
        }
        if password != confirmation {
            return Err(AccountError::PasswordMismatch);
        }
        if password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }

        let name = AccountName::new(username);
        let _guard = self.lock()?;
        let mut book = self.repository.load()?;
        book.insert(name.clone(), Account::new(hash_password(password)))?;
        self.repository.save(&book)?;

        tracing::info!("Registered account {}", name);
        Ok(name)
    }

    /// Check that `username` is taken, without touching credentials.
    ///
    /// Lets interactive clients reject a taken name before asking for a password.
    pub fn is_registered(&self, username: &str) -> Result<bool, AccountError> {
        let book = self.repository.load()?;
        Ok(book.contains(&AccountName::new(username.trim())))
    }

    /// Verify credentials.
    pub fn login(&self, username: &str, password: &str) -> Result<AccountName, AccountError> {
        let name = AccountName::new(username.trim());
        let book = self.repository.load()?;
        let account = book
            .account(&name)
            .ok_or_else(|| AccountError::UnknownUser(name.clone()))?;

        if !verify_password(password, &account.password_hash) {
            tracing::warn!("Failed login for {}", name);
            return Err(AccountError::WrongPassword);
        }

        tracing::info!("Logged in {}", name);
        Ok(name)
    }

    /// Current win/loss record of an account.
    pub fn record(&self, name: &AccountName) -> Result<Record, AccountError> {
        let book = self.repository.load()?;
        book.account(name)
            .map(|account| account.record)
            .ok_or_else(|| AccountError::UnknownUser(name.clone()))
    }

    /// Every account except `name`, in username order.
    pub fn opponents(&self, name: &AccountName) -> Result<Vec<(AccountName, Record)>, AccountError> {
        let book = self.repository.load()?;
        Ok(book
            .iter()
            .filter(|(other, _)| *other != name)
            .map(|(other, account)| (other.clone(), account.record))
            .collect())
    }

    /// Apply a concluded battle to the stored records as one transaction.
    ///
    /// Must be called exactly once per battle. Nothing is written if any
    /// registered participant is missing.
    pub fn record_outcome(&self, outcome: &BattleOutcome) -> Result<RecordUpdate, AccountError> {
        let _guard = self.lock()?;
        let mut book = self.repository.load()?;
        let update = apply_outcome(outcome, &mut book)?;

        if !update.is_empty() {
            self.repository.save(&book)?;
        }

        tracing::debug!(
            "Recorded outcome: win={:?} loss={:?}",
            update.win_credited,
            update.loss_credited
        );
        Ok(update)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, AccountError> {
        self.write_lock
            .lock()
            .map_err(|_| AccountError::Repository(RepositoryError::LockPoisoned))
    }
}
