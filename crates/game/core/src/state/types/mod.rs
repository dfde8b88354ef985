mod combatant;
mod creature;
mod participant;

pub use combatant::Combatant;
pub use creature::{Creature, CreatureError};
pub use participant::{AccountName, Participant};
