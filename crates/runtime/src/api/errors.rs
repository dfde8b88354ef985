//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, account operations, and configuration
//! so clients can bubble them up with consistent context.
use battle_core::{AccountName, BattleError, ConfigError, ErrorSeverity};
use thiserror::Error;

pub use crate::accounts::AccountError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("invalid battle configuration")]
    Config(#[source] ConfigError),

    #[error("account '{0}' cannot battle itself")]
    SelfBattle(AccountName),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::Account(inner) => inner.severity(),
            Self::Config(inner) => inner.severity(),
            Self::SelfBattle(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::Account(inner) => inner.error_code(),
            Self::Config(inner) => inner.error_code(),
            Self::SelfBattle(_) => "RUNTIME_SELF_BATTLE",
        }
    }
}
