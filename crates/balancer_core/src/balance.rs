//! Level-based clamping of creature stats.

use crate::core_api::{CoreError, StatSnapshot};
use crate::document::Document;
use crate::scanner;

pub const ATTACK_FIELD: &str = "attack";
pub const DEFENSE_FIELD: &str = "defense";
pub const HIT_POINTS_FIELD: &str = "hitPoints";
pub const DAMAGE_FIELD: &str = "damage";

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamps `value`; the upper bound is checked first so an inverted range
    /// resolves to its `max`.
    pub fn correct(&self, value: i32) -> i32 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}

/// Allowed stats for one creature level from 2 upwards.
///
/// Minimum damage has only a floor here; its ceiling is the clamped maximum damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRanges {
    pub attack: StatRange,
    pub defense: StatRange,
    pub max_damage: StatRange,
    pub min_damage_floor: i32,
    pub hit_points: StatRange,
}

#[rustfmt::skip]
const LEVEL_RANGES: [LevelRanges; 6] = [
    // level 2
    LevelRanges { attack: StatRange::new(4, 10),  defense: StatRange::new(2, 7),   max_damage: StatRange::new(3, 5),   min_damage_floor: 1,  hit_points: StatRange::new(9, 16) },
    // level 3
    LevelRanges { attack: StatRange::new(6, 11),  defense: StatRange::new(3, 11),  max_damage: StatRange::new(4, 8),   min_damage_floor: 2,  hit_points: StatRange::new(16, 38) },
    // level 4
    LevelRanges { attack: StatRange::new(6, 14),  defense: StatRange::new(6, 13),  max_damage: StatRange::new(5, 13),  min_damage_floor: 2,  hit_points: StatRange::new(18, 66) },
    // level 5
    LevelRanges { attack: StatRange::new(7, 17),  defense: StatRange::new(7, 17),  max_damage: StatRange::new(6, 22),  min_damage_floor: 3,  hit_points: StatRange::new(27, 77) },
    // level 6
    LevelRanges { attack: StatRange::new(11, 19), defense: StatRange::new(11, 19), max_damage: StatRange::new(9, 33),  min_damage_floor: 9,  hit_points: StatRange::new(63, 132) },
    // level 7
    LevelRanges { attack: StatRange::new(15, 33), defense: StatRange::new(15, 33), max_damage: StatRange::new(23, 66), min_damage_floor: 23, hit_points: StatRange::new(135, 330) },
];

const LEVEL_ONE_SKILL_CAP: i32 = 7;
const LEVEL_ONE_MAX_DAMAGE_CAP: i32 = 4;
const LEVEL_ONE_HIT_POINTS_CAP: i32 = 11;

pub fn is_balanced_level(level: i32) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

pub fn level_ranges(level: i32) -> Option<&'static LevelRanges> {
    if level <= MIN_LEVEL || level > MAX_LEVEL {
        return None;
    }
    LEVEL_RANGES.get((level - MIN_LEVEL - 1) as usize)
}

/// Clamps attack, defense, hit points and damage into the range of `stats.level`.
///
/// Levels outside 1..=7 are returned unchanged.
pub fn balance_stats(stats: StatSnapshot) -> StatSnapshot {
    if !is_balanced_level(stats.level) {
        return stats;
    }

    let mut out = stats;
    out.attack = out.attack.max(0);
    out.defense = out.defense.max(0);
    out.min_damage = out.min_damage.max(0);
    out.max_damage = out.max_damage.max(0);
    if out.hit_points < 0 {
        out.hit_points = 1;
    }

    match level_ranges(out.level) {
        Some(ranges) => {
            out.attack = ranges.attack.correct(out.attack);
            out.defense = ranges.defense.correct(out.defense);
            out.max_damage = ranges.max_damage.correct(out.max_damage);
            out.min_damage =
                StatRange::new(ranges.min_damage_floor, out.max_damage).correct(out.min_damage);
            out.hit_points = ranges.hit_points.correct(out.hit_points);
        }
        None => {
            out.attack = out.attack.min(LEVEL_ONE_SKILL_CAP);
            out.defense = out.defense.min(LEVEL_ONE_SKILL_CAP);
            out.max_damage = out.max_damage.min(LEVEL_ONE_MAX_DAMAGE_CAP);
            if out.min_damage > out.max_damage {
                out.min_damage = out.max_damage - 1;
            }
            out.hit_points = out.hit_points.min(LEVEL_ONE_HIT_POINTS_CAP);
        }
    }
    out
}

/// Balances `stats` and writes the result into `document`.
///
/// Nothing is written for levels outside 1..=7.
pub fn apply_balance(
    document: &mut Document,
    stats: StatSnapshot,
) -> Result<StatSnapshot, CoreError> {
    if !is_balanced_level(stats.level) {
        return Ok(stats);
    }

    let balanced = balance_stats(stats);
    scanner::replace_scalar_field(document, ATTACK_FIELD, balanced.attack);
    scanner::replace_scalar_field(document, DEFENSE_FIELD, balanced.defense);
    scanner::replace_scalar_field(document, HIT_POINTS_FIELD, balanced.hit_points);
    scanner::replace_min_max_pair(
        document,
        DAMAGE_FIELD,
        balanced.min_damage,
        balanced.max_damage,
    )?;
    Ok(balanced)
}
