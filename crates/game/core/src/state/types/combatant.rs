use super::{Creature, Participant};

/// One side of a battle: a participant, its creature, and the creature's
/// current health for this battle only.
///
/// Health is signed so overkill damage is reported exactly (e.g. `2 -> -35`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub participant: Participant,
    pub creature: Creature,
    pub current_health: i64,
}

impl Combatant {
    /// Creates a combatant at the creature's full health.
    pub fn new(participant: Participant, creature: Creature) -> Self {
        let current_health = i64::from(creature.hp);
        Self {
            participant,
            creature,
            current_health,
        }
    }

    /// Overrides the starting health (builder pattern).
    #[must_use]
    pub fn with_health(mut self, current_health: i64) -> Self {
        self.current_health = current_health;
        self
    }

    /// Returns true once health has dropped to zero or below.
    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.current_health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_full_health() {
        let creature = Creature::new("Snorlax", 160, 110, 65, 30).unwrap();
        let combatant = Combatant::new(Participant::Computer, creature);
        assert_eq!(combatant.current_health, 160);
        assert!(!combatant.is_fainted());
    }

    #[test]
    fn zero_health_counts_as_fainted() {
        let creature = Creature::new("Meowth", 40, 45, 35, 90).unwrap();
        let combatant = Combatant::new(Participant::Computer, creature).with_health(0);
        assert!(combatant.is_fainted());
    }
}
