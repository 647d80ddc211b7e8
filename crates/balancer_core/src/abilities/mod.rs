//! Ability-driven corrections: stack sizes, effective damage and value bonuses.

pub mod catalog;

use tracing::debug;

use crate::combat::CombatValues;
use crate::core_api::{CoreError, CoreErrorCode, DamageRange, QuantityRange};
use crate::document::Document;
use crate::scanner;
use catalog::{ABILITY_MODIFIERS, AbilityModifier};

pub const UPGRADES_FIELD: &str = "upgrades";
pub const ADV_MAP_AMOUNT_FIELD: &str = "advMapAmount";

pub const TWO_HEX_BREATH_ATTACK: &str = "TWO_HEX_BREATH_ATTACK";
pub const POISON: &str = "POISON";
pub const ACID_BREATH: &str = "ACID_BREATH";
pub const DOUBLE_DAMAGE_CHANCE: &str = "DOUBLE_DAMAGE_CHANCE";
pub const ALWAYS_MINIMUM_DAMAGE: &str = "ALWAYS_MINIMUM_DAMAGE";
pub const ALWAYS_MAXIMUM_DAMAGE: &str = "ALWAYS_MAXIMUM_DAMAGE";
pub const ADDITIONAL_ATTACK: &str = "ADDITIONAL_ATTACK";
pub const THREE_HEADED_ATTACK: &str = "THREE_HEADED_ATTACK";
pub const ATTACKS_ALL_ADJACENT: &str = "ATTACKS_ALL_ADJACENT";
pub const ENEMY_DEFENCE_REDUCTION: &str = "ENEMY_DEFENCE_REDUCTION";
pub const GENERAL_ATTACK_REDUCTION: &str = "GENERAL_ATTACK_REDUCTION";

const FAST_SPEED: i32 = 10;
const FAST_SPEED_BONUS: f64 = 1.1;
const MEDIUM_SPEED: i32 = 5;
const MEDIUM_SPEED_BONUS: f64 = 1.05;

/// Abilities that change the effective damage or the reductions fed to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityFlags {
    pub two_hex_breath: bool,
    pub poison: bool,
    pub acid_breath: bool,
    pub double_damage: bool,
    pub minimum_damage: bool,
    pub maximum_damage: bool,
    pub additional_attack: bool,
    pub three_headed_attack: bool,
    pub attacks_all_adjacent: bool,
    pub enemy_defense_reduction: bool,
    pub general_attack_reduction: bool,
}

impl AbilityFlags {
    pub fn detect(document: &Document) -> Self {
        let has = |name| scanner::ability_exists(document, name);
        Self {
            two_hex_breath: has(TWO_HEX_BREATH_ATTACK),
            poison: has(POISON),
            acid_breath: has(ACID_BREATH),
            double_damage: has(DOUBLE_DAMAGE_CHANCE),
            minimum_damage: has(ALWAYS_MINIMUM_DAMAGE),
            maximum_damage: has(ALWAYS_MAXIMUM_DAMAGE),
            additional_attack: has(ADDITIONAL_ATTACK),
            three_headed_attack: has(THREE_HEADED_ATTACK),
            attacks_all_adjacent: has(ATTACKS_ALL_ADJACENT),
            enemy_defense_reduction: has(ENEMY_DEFENCE_REDUCTION),
            general_attack_reduction: has(GENERAL_ATTACK_REDUCTION),
        }
    }
}

/// Fractions by which attacker/defender skills of the reference population shrink.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reductions {
    pub general_attack: f64,
    pub enemy_defense: f64,
}

/// A definition without an `upgrades` field is the upgraded form of its creature.
pub fn is_upgraded(document: &Document) -> bool {
    !scanner::ability_exists(document, UPGRADES_FIELD)
}

/// Adventure map stack size for a creature level; `(0, 0)` outside levels 1..=7.
pub fn quantity_range(level: i32, upgraded: bool) -> QuantityRange {
    let (min, max) = match (level, upgraded) {
        (1, true) => (20, 30),
        (1, false) => (20, 50),
        (2, true) => (16, 25),
        (2, false) => (25, 30),
        (3, true) => (12, 20),
        (3, false) => (12, 25),
        (4, true) => (10, 16),
        (4, false) => (10, 20),
        (5, true) => (8, 12),
        (5, false) => (8, 16),
        (6, true) => (5, 10),
        (6, false) => (5, 12),
        (7, true) => (3, 8),
        (7, false) => (4, 10),
        _ => (0, 0),
    };
    QuantityRange { min, max }
}

pub fn apply_quantity_range(
    document: &mut Document,
    level: i32,
    upgraded: bool,
) -> Result<QuantityRange, CoreError> {
    let range = quantity_range(level, upgraded);
    scanner::replace_min_max_pair(document, ADV_MAP_AMOUNT_FIELD, range.min, range.max)?;
    Ok(range)
}

/// Damage range the value model should see once damage-shaping abilities are
/// taken into account.
///
/// Poison, acid breath and double damage all read the same ability magnitude,
/// the first `val` of the `abilities` block.
pub fn corrected_damage(
    document: &Document,
    flags: &AbilityFlags,
    damage: DamageRange,
) -> Result<DamageRange, CoreError> {
    let mut out = damage;
    if flags.minimum_damage {
        out.max = damage.min;
    }
    if flags.maximum_damage {
        out.min = damage.max;
    }
    if flags.three_headed_attack {
        out.max = checked_damage(out.max.checked_mul(3), THREE_HEADED_ATTACK)?;
    }
    if flags.attacks_all_adjacent {
        out.max = checked_damage(out.max.checked_mul(6), ATTACKS_ALL_ADJACENT)?;
    }
    if flags.additional_attack {
        out.max = checked_damage(out.max.checked_mul(2), ADDITIONAL_ATTACK)?;
    }
    if flags.two_hex_breath {
        out.max = checked_damage(out.max.checked_mul(2), TWO_HEX_BREATH_ATTACK)?;
    }
    if flags.acid_breath {
        let magnitude = scanner::ability_magnitude(document)?;
        out.max = checked_damage(out.max.checked_add(magnitude), ACID_BREATH)?;
    }
    if flags.poison {
        let magnitude = scanner::ability_magnitude(document)?;
        out.max = checked_damage(out.max.checked_add(magnitude), POISON)?;
    }
    if flags.double_damage && scanner::ability_magnitude(document)? > 0 {
        out.max = checked_damage(out.max.checked_add(damage.max), DOUBLE_DAMAGE_CHANCE)?;
    }
    debug!(min = out.min, max = out.max, "corrected damage");
    Ok(out)
}

fn checked_damage(value: Option<i32>, ability: &str) -> Result<i32, CoreError> {
    value.ok_or_else(|| {
        CoreError::new(
            CoreErrorCode::DegenerateModel,
            format!("max damage overflows after applying {ability}"),
        )
    })
}

fn magnitude_fraction(document: &Document) -> Result<f64, CoreError> {
    let fraction = f64::from(scanner::ability_magnitude(document)?) / 100.0;
    Ok(fraction.min(1.0))
}

pub fn reductions(document: &Document, flags: &AbilityFlags) -> Result<Reductions, CoreError> {
    let mut out = Reductions::default();
    if flags.enemy_defense_reduction {
        out.enemy_defense = magnitude_fraction(document)?;
    }
    if flags.general_attack_reduction {
        out.general_attack = magnitude_fraction(document)?;
    }
    Ok(out)
}

pub fn present_modifiers(document: &Document) -> Vec<&'static AbilityModifier> {
    ABILITY_MODIFIERS
        .iter()
        .filter(|modifier| scanner::ability_exists(document, modifier.name))
        .collect()
}

pub fn speed_bonus(speed: i32) -> f64 {
    if speed > FAST_SPEED {
        FAST_SPEED_BONUS
    } else if speed > MEDIUM_SPEED {
        MEDIUM_SPEED_BONUS
    } else {
        1.0
    }
}

/// Scales `values` by every present ability bonus and the speed bonus, then
/// truncates towards zero.
pub fn adjusted_values(
    values: CombatValues,
    modifiers: &[&AbilityModifier],
    speed: i32,
) -> CombatValues {
    let mut fight = f64::from(values.fight_value);
    let mut ai = f64::from(values.ai_value);
    for modifier in modifiers {
        fight *= modifier.fight_factor();
        ai *= modifier.ai_factor();
    }
    let bonus = speed_bonus(speed);
    fight *= bonus;
    ai *= bonus;
    CombatValues {
        fight_value: fight as i32,
        ai_value: ai as i32,
    }
}
