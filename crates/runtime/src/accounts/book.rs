//! Ordered collection of accounts keyed by username.

use std::collections::BTreeMap;

use battle_core::{AccountName, Ledger, Record};
use serde::{Deserialize, Serialize};

use super::AccountError;

/// One registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(flatten)]
    pub record: Record,
}

impl Account {
    /// A fresh account with no battles recorded.
    pub fn new(password_hash: String) -> Self {
        Self::with_record(password_hash, Record::default())
    }

    pub fn with_record(password_hash: String, record: Record) -> Self {
        Self {
            password_hash,
            record,
        }
    }
}

/// All accounts, ordered by username.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountBook {
    accounts: BTreeMap<AccountName, Account>,
}

impl AccountBook {
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, name: &AccountName) -> bool {
        self.accounts.contains_key(name)
    }

    pub fn account(&self, name: &AccountName) -> Option<&Account> {
        self.accounts.get(name)
    }

    /// Adds a new account; existing usernames are never overwritten.
    pub fn insert(&mut self, name: AccountName, account: Account) -> Result<(), AccountError> {
        if self.accounts.contains_key(&name) {
            return Err(AccountError::UsernameTaken(name));
        }
        self.accounts.insert(name, account);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountName, &Account)> {
        self.accounts.iter()
    }
}

impl Ledger for AccountBook {
    fn get(&self, account: &AccountName) -> Option<Record> {
        self.accounts.get(account).map(|entry| entry.record)
    }

    fn increment_wins(&mut self, account: &AccountName) {
        if let Some(entry) = self.accounts.get_mut(account) {
            entry.record.wins = entry.record.wins.saturating_add(1);
        }
    }

    fn increment_losses(&mut self, account: &AccountName) {
        if let Some(entry) = self.accounts.get_mut(account) {
            entry.record.losses = entry.record.losses.saturating_add(1);
        }
    }
}
