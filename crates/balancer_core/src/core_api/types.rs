use serde::{Deserialize, Serialize};

/// Stats read from (or written back to) one creature definition.
///
/// `min_damage`/`max_damage` are `-1` when the `damage` block lacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatSnapshot {
    pub level: i32,
    pub attack: i32,
    pub defense: i32,
    pub hit_points: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub speed: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

/// Adventure map stack size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuantityRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub original: StatSnapshot,
    pub balanced: StatSnapshot,
    pub upgraded: bool,
    pub quantity: QuantityRange,
    pub corrected_damage: DamageRange,
    pub abilities: Vec<String>,
    pub fight_value: i32,
    pub ai_value: i32,
}
