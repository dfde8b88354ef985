//! Battle outcome types.

use crate::state::Participant;

/// One strike, recorded in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeEvent {
    /// 1-based round in which the strike happened.
    pub round: u32,
    pub attacker: Participant,
    pub attacker_creature: String,
    pub defender: Participant,
    pub defender_creature: String,
    pub damage: u32,
    /// Defender's health after the strike (may be negative).
    pub defender_health: i64,
}

impl StrikeEvent {
    /// Returns true if this strike knocked the defender out.
    pub fn is_knockout(&self) -> bool {
        self.defender_health <= 0
    }
}

/// Terminal state of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    Victory {
        winner: Participant,
        loser: Participant,
    },
    /// Both combatants were already fainted when the battle began.
    Draw,
}

/// Result of one battle plus the ordered strike log.
///
/// Created once per battle, handed to the record updater, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub result: BattleResult,
    /// Number of rounds started (a round may end after its first strike).
    pub rounds: u32,
    pub events: Vec<StrikeEvent>,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<&Participant> {
        match &self.result {
            BattleResult::Victory { winner, .. } => Some(winner),
            BattleResult::Draw => None,
        }
    }

    pub fn loser(&self) -> Option<&Participant> {
        match &self.result {
            BattleResult::Victory { loser, .. } => Some(loser),
            BattleResult::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.result, BattleResult::Draw)
    }

    /// Total number of strikes logged.
    pub fn strike_count(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_has_no_winner_or_loser() {
        let outcome = BattleOutcome {
            result: BattleResult::Draw,
            rounds: 0,
            events: Vec::new(),
        };
        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.loser(), None);
    }

    #[test]
    fn victory_exposes_both_labels() {
        let outcome = BattleOutcome {
            result: BattleResult::Victory {
                winner: Participant::registered("misty"),
                loser: Participant::Computer,
            },
            rounds: 1,
            events: Vec::new(),
        };
        assert_eq!(outcome.winner(), Some(&Participant::registered("misty")));
        assert_eq!(outcome.loser(), Some(&Participant::Computer));
        assert!(!outcome.is_draw());
    }
}
