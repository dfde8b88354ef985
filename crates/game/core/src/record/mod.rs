//! Win/loss bookkeeping for concluded battles.
//!
//! [`apply_outcome`] is the single place where a [`BattleOutcome`] turns into
//! ledger mutations. The ledger itself is abstracted by the [`Ledger`] trait so
//! the persistence layer decides how counters are stored and locked.

use std::collections::BTreeMap;

use crate::combat::{BattleOutcome, BattleResult};
use crate::error::{BattleError, ErrorSeverity};
use crate::state::AccountName;

/// Win/loss counters for one account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub const fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }
}

/// Per-account win/loss ledger.
///
/// Implementations are only asked to increment counters of accounts that
/// [`Ledger::get`] has just reported as present.
pub trait Ledger {
    /// Returns the record of an account, or `None` if it does not exist.
    fn get(&self, account: &AccountName) -> Option<Record>;

    /// Adds one win to an existing account.
    fn increment_wins(&mut self, account: &AccountName);

    /// Adds one loss to an existing account.
    fn increment_losses(&mut self, account: &AccountName);
}

/// Plain in-memory ledger.
impl Ledger for BTreeMap<AccountName, Record> {
    fn get(&self, account: &AccountName) -> Option<Record> {
        BTreeMap::get(self, account).copied()
    }

    fn increment_wins(&mut self, account: &AccountName) {
        if let Some(record) = self.get_mut(account) {
            record.wins = record.wins.saturating_add(1);
        }
    }

    fn increment_losses(&mut self, account: &AccountName) {
        if let Some(record) = self.get_mut(account) {
            record.losses = record.losses.saturating_add(1);
        }
    }
}

/// Counters changed by one [`apply_outcome`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub win_credited: Option<AccountName>,
    pub loss_credited: Option<AccountName>,
}

impl RecordUpdate {
    /// Returns true if no counter moved (draw, or computer beat computer).
    pub fn is_empty(&self) -> bool {
        self.win_credited.is_none() && self.loss_credited.is_none()
    }
}

/// Errors raised when applying an outcome to a ledger.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A registered participant has no ledger entry.
    #[error("account '{0}' does not exist in the ledger")]
    UnknownAccount(AccountName),

    /// Crediting the account would overflow a stored counter.
    #[error("{counter} counter of account '{account}' is at its maximum")]
    CounterOverflow {
        account: AccountName,
        counter: &'static str,
    },
}

impl BattleError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAccount(_) => ErrorSeverity::Fatal,
            Self::CounterOverflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAccount(_) => "RECORD_UNKNOWN_ACCOUNT",
            Self::CounterOverflow { .. } => "RECORD_COUNTER_OVERFLOW",
        }
    }
}

/// Applies a concluded battle to the ledger.
///
/// - Registered winner: wins + 1
/// - Registered loser: losses + 1
/// - Computer side or draw: nothing
///
/// Every registered label is checked before any counter changes, so an
/// unknown account or a counter already at `u32::MAX` leaves the ledger
/// untouched. Callers must invoke this exactly once per battle; there is no
/// deduplication.
pub fn apply_outcome<L>(
    outcome: &BattleOutcome,
    ledger: &mut L,
) -> Result<RecordUpdate, RecordError>
where
    L: Ledger + ?Sized,
{
    let (winner, loser) = match &outcome.result {
        BattleResult::Draw => return Ok(RecordUpdate::default()),
        BattleResult::Victory { winner, loser } => (winner.account(), loser.account()),
    };

    if let Some(account) = winner {
        let record = known_record(ledger, account)?;
        record.wins.checked_add(1).ok_or_else(|| RecordError::CounterOverflow {
            account: account.clone(),
            counter: "wins",
        })?;
    }
    if let Some(account) = loser {
        let record = known_record(ledger, account)?;
        record.losses.checked_add(1).ok_or_else(|| RecordError::CounterOverflow {
            account: account.clone(),
            counter: "losses",
        })?;
    }

    if let Some(account) = winner {
        ledger.increment_wins(account);
    }
    if let Some(account) = loser {
        ledger.increment_losses(account);
    }

    Ok(RecordUpdate {
        win_credited: winner.cloned(),
        loss_credited: loser.cloned(),
    })
}

fn known_record<L>(ledger: &L, account: &AccountName) -> Result<Record, RecordError>
where
    L: Ledger + ?Sized,
{
    ledger
        .get(account)
        .ok_or_else(|| RecordError::UnknownAccount(account.clone()))
}
