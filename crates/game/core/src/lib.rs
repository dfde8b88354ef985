//! Deterministic battle rules shared across clients.
//!
//! `battle-core` defines the canonical rules (turn order, damage, fainting) and
//! exposes pure APIs that can be reused by the runtime and by offline tools.
//! Battles are resolved by [`engine::BattleEngine`], which never touches
//! storage; the resulting [`BattleOutcome`] is applied to a win/loss
//! [`Ledger`] by [`record::apply_outcome`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod state;

pub use combat::{BattleOutcome, BattleResult, Side, StrikeEvent, TurnOrder};
pub use config::{BattleConfig, ConfigError};
pub use engine::{BattleEngine, resolve_battle};
pub use error::{BattleError, ErrorSeverity};
pub use record::{Ledger, Record, RecordError, RecordUpdate, apply_outcome};
pub use state::{AccountName, Combatant, Creature, CreatureError, Participant};
