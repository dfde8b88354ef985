use crate::error::{BattleError, ErrorSeverity};

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Damage floor applied to every strike.
    ///
    /// Must be at least 1 so that every strike makes progress and each
    /// battle terminates.
    pub minimum_damage: u32,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
        }
    }

    pub fn with_minimum_damage(minimum_damage: u32) -> Self {
        Self { minimum_damage }
    }

    /// Rejects configurations under which a battle could stall.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_damage == 0 {
            return Err(ConfigError::ZeroMinimumDamage);
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised when validating a [`BattleConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum damage must be at least 1")]
    ZeroMinimumDamage,
}

impl BattleError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMinimumDamage => "CONFIG_ZERO_MINIMUM_DAMAGE",
        }
    }
}
