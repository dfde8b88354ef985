//! Combat resolution primitives.
//!
//! This module provides pure functions for the pieces of a battle.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `calculate_damage`: Attack against defense with a damage floor
//! - `apply_damage`: Health reduction (may go below zero)
//! - `TurnOrder::establish`: Fixed strike order for a whole battle

pub mod damage;
pub mod result;
pub mod turns;

pub use damage::{apply_damage, calculate_damage};
pub use result::{BattleOutcome, BattleResult, StrikeEvent};
pub use turns::{Side, TurnOrder};
