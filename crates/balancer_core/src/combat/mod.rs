//! Fight value and AI value model.
//!
//! A creature is rated by how hard it hits the standard creature population and
//! how well it survives being hit by it. Both ratings are averages of a damage
//! coefficient over the reference tables in [`reference`].
//!
//! All rounding is half-to-even.

pub mod reference;

use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};
use reference::{REFERENCE_POPULATION, STANDARD_ATTACK, STANDARD_DEFENSE};

/// Skill added to both sides before comparing them.
pub const AVERAGE_SKILL: f64 = 4.0;

const ATTACK_ADVANTAGE_STEP: f64 = 0.05;
const ATTACK_ADVANTAGE_CAP: f64 = 3.0;
const DEFENSE_ADVANTAGE_STEP: f64 = 0.025;
const DEFENSE_ADVANTAGE_CAP: f64 = 0.7;

const DAMAGE_FACTOR: f64 = 0.5;
const DAMAGE_SCALE: f64 = 50.0;
const DEFENSE_WEIGHT: f64 = 7.0;

pub const FIGHT_PROTECTION_POWER: f64 = 0.57;
pub const AI_PROTECTION_POWER: f64 = 0.67;
pub const FIGHT_MULTIPLIER: f64 = 1.0;
pub const AI_MULTIPLIER: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatValues {
    pub fight_value: i32,
    pub ai_value: i32,
}

fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Damage multiplier of one attacker/defender pairing.
///
/// Ranges from 0 (defender far ahead) to 4 (attacker far ahead).
pub fn damage_coefficient(attack: f64, defense: f64) -> i32 {
    let a = attack + AVERAGE_SKILL;
    let d = defense + AVERAGE_SKILL;
    if a >= d {
        round_half_even(1.0 + ((a - d) * ATTACK_ADVANTAGE_STEP).min(ATTACK_ADVANTAGE_CAP))
    } else {
        round_half_even(1.0 - ((d - a) * DEFENSE_ADVANTAGE_STEP).min(DEFENSE_ADVANTAGE_CAP))
    }
}

/// Average coefficient of `attack` against every standard defense, each reduced
/// by `enemy_defense_reduction` (a fraction, 0.0 for none).
pub fn attack_damage_index(attack: i32, enemy_defense_reduction: f64) -> i32 {
    let sum: i32 = STANDARD_DEFENSE
        .iter()
        .map(|&defense| {
            damage_coefficient(
                f64::from(attack),
                f64::from(defense) * (1.0 - enemy_defense_reduction),
            )
        })
        .sum();
    round_half_even(f64::from(sum) / REFERENCE_POPULATION as f64)
}

/// Average coefficient of every standard attack, each reduced by
/// `general_attack_reduction`, against `defense`.
pub fn defense_damage_index(defense: i32, general_attack_reduction: f64) -> i32 {
    let sum: i32 = STANDARD_ATTACK
        .iter()
        .map(|&attack| {
            damage_coefficient(
                f64::from(attack) * (1.0 - general_attack_reduction),
                f64::from(defense),
            )
        })
        .sum();
    round_half_even(f64::from(sum) / REFERENCE_POPULATION as f64)
}

pub fn final_value(
    attack_aggregate: f64,
    defense_aggregate: f64,
    protection_power: f64,
    multiplier: f64,
) -> i32 {
    if attack_aggregate == 0.0 {
        return 0;
    }
    round_half_even(attack_aggregate.sqrt() * defense_aggregate.powf(protection_power) * multiplier)
}

/// Fight value and AI value of a creature before ability bonuses.
///
/// Fails with [`CoreErrorCode::DegenerateModel`] when the defense index is zero
/// (defense so high that no standard attacker does damage) or when negative
/// stats drive an aggregate below zero.
pub fn compute_values(
    attack: i32,
    defense: i32,
    hit_points: i32,
    min_damage: i32,
    max_damage: i32,
    general_attack_reduction: f64,
    enemy_defense_reduction: f64,
) -> Result<CombatValues, CoreError> {
    let attack_index = attack_damage_index(attack, enemy_defense_reduction);
    let defense_index = defense_damage_index(defense, general_attack_reduction);
    if defense_index == 0 {
        return Err(CoreError::new(
            CoreErrorCode::DegenerateModel,
            format!("defense damage index is zero for defense {defense}"),
        ));
    }

    let average_damage =
        DAMAGE_FACTOR * f64::from(max_damage) + (1.0 - DAMAGE_FACTOR) * f64::from(min_damage);
    let attack_aggregate = f64::from(attack_index) * average_damage * DAMAGE_SCALE + 1.0;
    let defense_aggregate =
        (DEFENSE_WEIGHT / f64::from(defense_index) + 1.0) * f64::from(hit_points) + 1.0;

    if attack_aggregate < 0.0 || defense_aggregate < 0.0 {
        return Err(CoreError::new(
            CoreErrorCode::DegenerateModel,
            format!(
                "negative aggregate (attack {attack_aggregate}, defense {defense_aggregate}); \
                 damage {min_damage}-{max_damage}, hit points {hit_points}"
            ),
        ));
    }

    Ok(CombatValues {
        fight_value: final_value(
            attack_aggregate,
            defense_aggregate,
            FIGHT_PROTECTION_POWER,
            FIGHT_MULTIPLIER,
        ),
        ai_value: final_value(
            attack_aggregate,
            defense_aggregate,
            AI_PROTECTION_POWER,
            AI_MULTIPLIER,
        ),
    })
}
