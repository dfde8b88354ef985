//! Strike order for a battle.

use crate::state::Combatant;

/// Identifies one of the two combatants by argument position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The combatant passed first.
    First,
    /// The combatant passed second.
    Second,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Fixed order in which the two combatants strike in every round.
///
/// Established once at battle start and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOrder {
    leader: Side,
}

impl TurnOrder {
    /// Strictly greater speed strikes first; ties go to the first argument.
    pub fn establish(first: &Combatant, second: &Combatant) -> Self {
        let leader = if second.creature.speed > first.creature.speed {
            Side::Second
        } else {
            Side::First
        };
        Self { leader }
    }

    /// Side that strikes first in each round.
    pub fn leader(&self) -> Side {
        self.leader
    }

    /// Side that strikes second in each round.
    pub fn follower(&self) -> Side {
        self.leader.opponent()
    }

    /// Strike sequence of one round.
    pub fn round(&self) -> [Side; 2] {
        [self.leader(), self.follower()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Creature, Participant};

    fn combatant(name: &str, speed: u32) -> Combatant {
        let creature = Creature::new(name, 10, 10, 10, speed).unwrap();
        Combatant::new(Participant::Computer, creature)
    }

    #[test]
    fn faster_first_argument_leads() {
        let order = TurnOrder::establish(&combatant("a", 65), &combatant("b", 20));
        assert_eq!(order.round(), [Side::First, Side::Second]);
    }

    #[test]
    fn faster_second_argument_leads() {
        let order = TurnOrder::establish(&combatant("a", 20), &combatant("b", 65));
        assert_eq!(order.leader(), Side::Second);
        assert_eq!(order.follower(), Side::First);
    }

    #[test]
    fn tie_goes_to_first_argument() {
        let a = combatant("a", 55);
        let b = combatant("b", 55);
        assert_eq!(TurnOrder::establish(&a, &b).leader(), Side::First);
        assert_eq!(TurnOrder::establish(&b, &a).leader(), Side::First);
    }
}
