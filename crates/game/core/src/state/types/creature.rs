use std::fmt;

use crate::error::{BattleError, ErrorSeverity};

/// Immutable reference stats for one creature species.
///
/// Creatures come from a static catalog and are never mutated. Several
/// combatants may share the same creature; each battle tracks its own health
/// in [`Combatant`](super::Combatant).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Creature {
    /// Create a creature, rejecting a blank name.
    pub fn new(
        name: impl Into<String>,
        hp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Result<Self, CreatureError> {
        let creature = Self {
            name: name.into(),
            hp,
            attack,
            defense,
            speed,
        };
        creature.validate()?;
        Ok(creature)
    }

    /// Checks the invariants the type system cannot express.
    ///
    /// Used for creatures built from deserialized data, which bypasses [`Creature::new`].
    pub fn validate(&self) -> Result<(), CreatureError> {
        if self.name.trim().is_empty() {
            return Err(CreatureError::BlankName);
        }
        Ok(())
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP: {}, Attack: {}, Defense: {}, Speed: {})",
            self.name, self.hp, self.attack, self.defense, self.speed
        )
    }
}

/// Errors raised when constructing a [`Creature`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreatureError {
    #[error("creature name must not be blank")]
    BlankName,
}

impl BattleError for CreatureError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BlankName => "CREATURE_BLANK_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_named_creature() {
        let creature = Creature::new("Pikachu", 35, 55, 40, 90).unwrap();
        assert_eq!(creature.name, "Pikachu");
        assert_eq!(creature.speed, 90);
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Creature::new("   ", 1, 1, 1, 1),
            Err(CreatureError::BlankName)
        );
    }

    #[test]
    fn display_lists_stats() {
        let creature = Creature::new("Eevee", 55, 55, 50, 55).unwrap();
        assert_eq!(
            creature.to_string(),
            "Eevee (HP: 55, Attack: 55, Defense: 50, Speed: 55)"
        );
    }
}
