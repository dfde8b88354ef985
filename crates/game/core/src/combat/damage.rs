//! Damage calculation and application.

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage dealt by one strike.
///
/// # Formula
///
/// ```text
/// final_damage = max(minimum, attack - defense)
/// ```
///
/// Subtraction saturates at zero, so any defense at or above the attack
/// yields exactly `minimum`.
///
/// # Arguments
///
/// * `attack` - Attacker's attack stat
/// * `defense` - Defender's defense stat
/// * `minimum` - Damage floor from [`BattleConfig`](crate::BattleConfig)
pub fn calculate_damage(attack: u32, defense: u32, minimum: u32) -> u32 {
    attack.saturating_sub(defense).max(minimum)
}

/// Apply damage to current health.
///
/// Health is not clamped: the returned value may be negative, and any value
/// at or below zero means the creature has fainted.
pub fn apply_damage(current_health: i64, damage: u32) -> i64 {
    current_health.saturating_sub(i64::from(damage))
}
