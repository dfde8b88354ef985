//! Errors raised by account operations.

use battle_core::{AccountName, BattleError, ErrorSeverity, RecordError};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors surfaced by [`AccountService`](super::AccountService).
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("username '{0}' already exists")]
    UsernameTaken(AccountName),

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("username '{0}' does not exist")]
    UnknownUser(AccountName),

    #[error("incorrect password")]
    WrongPassword,

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BattleError for AccountError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyUsername | Self::EmptyPassword | Self::PasswordMismatch => {
                ErrorSeverity::Validation
            }
            Self::UsernameTaken(_) | Self::UnknownUser(_) | Self::WrongPassword => {
                ErrorSeverity::Recoverable
            }
            Self::Record(inner) => inner.severity(),
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "ACCOUNT_EMPTY_USERNAME",
            Self::UsernameTaken(_) => "ACCOUNT_USERNAME_TAKEN",
            Self::EmptyPassword => "ACCOUNT_EMPTY_PASSWORD",
            Self::PasswordMismatch => "ACCOUNT_PASSWORD_MISMATCH",
            Self::UnknownUser(_) => "ACCOUNT_UNKNOWN_USER",
            Self::WrongPassword => "ACCOUNT_WRONG_PASSWORD",
            Self::Record(inner) => inner.error_code(),
            Self::Repository(_) => "ACCOUNT_REPOSITORY",
        }
    }
}
