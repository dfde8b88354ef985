//! Battle resolution.
//!
//! The [`BattleEngine`] runs a battle between two [`Combatant`]s to completion
//! and returns a [`BattleOutcome`]. It is a pure function of its inputs: the
//! combatants are borrowed, health is tracked in a local copy, and no ledger
//! or storage is touched. Applying the outcome is the job of
//! [`record::apply_outcome`](crate::record::apply_outcome).

use crate::combat::{
    BattleOutcome, BattleResult, Side, StrikeEvent, TurnOrder, apply_damage, calculate_damage,
};
use crate::config::{BattleConfig, ConfigError};
use crate::state::Combatant;

/// Deterministic two-combatant battle engine.
///
/// # Rules
///
/// - Turn order is fixed once by speed; ties go to the first argument
/// - Each strike deals `max(minimum_damage, attack - defense)`
/// - Fainting is checked after every strike; a fainted combatant never acts
/// - The battle ends at the first knockout; the striker wins
#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    config: BattleConfig,
}

impl BattleEngine {
    /// Creates an engine, rejecting configurations that could stall a battle.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Runs a battle to completion.
    ///
    /// Neither argument is modified, so identical inputs always give identical
    /// outcomes.
    pub fn resolve(&self, first: &Combatant, second: &Combatant) -> BattleOutcome {
        if let Some(result) = Self::pre_fainted(first, second) {
            return BattleOutcome {
                result,
                rounds: 0,
                events: Vec::new(),
            };
        }

        let combatants = [first, second];
        let mut health = [first.current_health, second.current_health];
        let order = TurnOrder::establish(first, second);
        let mut events = Vec::new();
        let mut round: u32 = 0;

        loop {
            round += 1;

            for attacker_side in order.round() {
                let defender_side = attacker_side.opponent();
                let attacker = combatants[slot(attacker_side)];
                let defender = combatants[slot(defender_side)];

                let damage = calculate_damage(
                    attacker.creature.attack,
                    defender.creature.defense,
                    self.config.minimum_damage,
                );
                let remaining = apply_damage(health[slot(defender_side)], damage);
                health[slot(defender_side)] = remaining;

                events.push(StrikeEvent {
                    round,
                    attacker: attacker.participant.clone(),
                    attacker_creature: attacker.creature.name.clone(),
                    defender: defender.participant.clone(),
                    defender_creature: defender.creature.name.clone(),
                    damage,
                    defender_health: remaining,
                });

                if remaining <= 0 {
                    return BattleOutcome {
                        result: BattleResult::Victory {
                            winner: attacker.participant.clone(),
                            loser: defender.participant.clone(),
                        },
                        rounds: round,
                        events,
                    };
                }
            }
        }
    }

    /// Settles battles in which a side is already down before any strike.
    fn pre_fainted(first: &Combatant, second: &Combatant) -> Option<BattleResult> {
        match (first.is_fainted(), second.is_fainted()) {
            (true, true) => Some(BattleResult::Draw),
            (true, false) => Some(BattleResult::Victory {
                winner: second.participant.clone(),
                loser: first.participant.clone(),
            }),
            (false, true) => Some(BattleResult::Victory {
                winner: first.participant.clone(),
                loser: second.participant.clone(),
            }),
            (false, false) => None,
        }
    }
}

#[inline]
const fn slot(side: Side) -> usize {
    match side {
        Side::First => 0,
        Side::Second => 1,
    }
}

/// Resolves a battle with the default configuration.
pub fn resolve_battle(first: &Combatant, second: &Combatant) -> BattleOutcome {
    BattleEngine::default().resolve(first, second)
}
