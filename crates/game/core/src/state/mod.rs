//! Battle participants and their per-battle state.
//!
//! This module owns the data structures that describe who fights with what:
//! immutable [`Creature`] reference data, the [`Participant`] label deciding
//! whether a side carries a persisted record, and the [`Combatant`] pairing the
//! two with a health counter scoped to a single battle.
pub mod types;

pub use types::{AccountName, Combatant, Creature, CreatureError, Participant};
