//! Battle narration formatting.
//!
//! Builds the lines printed for a finished battle from its report:
//! 1. Banner: who brought which creature
//! 2. Strike pairs: the hit, then the defender's remaining health
//! 3. Ending: the faint line and the winner, or a draw

use battle_core::{AccountName, BattleOutcome, Combatant, Creature, Record, StrikeEvent};
use battle_runtime::BattleReport;

/// "Name (HP: x, Attack: x, Defense: x, Speed: x)" with a menu position.
pub fn format_creature_entry(position: usize, creature: &Creature) -> String {
    format!("{}. {}", position, creature)
}

/// Opponent menu line with the opponent's record.
pub fn format_opponent_entry(position: usize, name: &str, record: &Record) -> String {
    format!(
        "{}. {} (Wins: {}, Losses: {})",
        position, name, record.wins, record.losses
    )
}

pub fn format_banner(first: &Combatant, second: &Combatant) -> Vec<String> {
    vec![
        "\n=== Battle Start ===".to_string(),
        format_combatant(first),
        format!("{}\n", format_combatant(second)),
    ]
}

fn format_combatant(combatant: &Combatant) -> String {
    format!(
        "{} has {} (HP: {})",
        combatant.participant, combatant.creature.name, combatant.current_health
    )
}

pub fn format_strike(event: &StrikeEvent) -> [String; 2] {
    [
        format!(
            "{}'s {} attacks {}'s {} for {} damage.",
            event.attacker, event.attacker_creature, event.defender, event.defender_creature, event.damage
        ),
        format!(
            "{}'s {} HP is now {}.\n",
            event.defender, event.defender_creature, event.defender_health
        ),
    ]
}

/// Closing lines: faint and winner, or the draw line.
pub fn format_ending(outcome: &BattleOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(last) = outcome.events.last().filter(|event| event.is_knockout()) {
        lines.push(format!(
            "{}'s {} has fainted!",
            last.defender, last.defender_creature
        ));
    }
    match outcome.winner() {
        Some(winner) => lines.push(format!("{} wins the battle!\n", winner)),
        None => lines.push("The battle ended in a draw!\n".to_string()),
    }
    lines
}

/// Updated standing of an account credited by a battle.
pub fn format_record_line(name: &AccountName, record: &Record) -> String {
    format!(
        "{}'s record is now Wins: {}, Losses: {}",
        name, record.wins, record.losses
    )
}

/// Every narration line for a finished battle, in print order.
pub fn format_report(report: &BattleReport) -> Vec<String> {
    let mut lines = format_banner(&report.first, &report.second);
    for event in &report.outcome.events {
        lines.extend(format_strike(event));
    }
    lines.extend(format_ending(&report.outcome));
    lines
}
