use tracing::info;

use crate::abilities::{self, AbilityFlags};
use crate::balance::{self, ATTACK_FIELD, DAMAGE_FIELD, DEFENSE_FIELD, HIT_POINTS_FIELD};
use crate::combat;
use crate::document::Document;
use crate::scanner;

use super::error::CoreError;
use super::types::{BalanceReport, DamageRange, StatSnapshot};

pub const LEVEL_FIELD: &str = "level";
pub const SPEED_FIELD: &str = "speed";
pub const AI_VALUE_FIELD: &str = "aiValue";
pub const FIGHT_VALUE_FIELD: &str = "fightValue";

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// A balanced document together with what was done to it.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub document: Document,
    pub report: BalanceReport,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn balance_text(&self, text: &str) -> Result<Outcome, CoreError> {
        self.balance(Document::from_text(text))
    }

    /// Balances one creature definition.
    ///
    /// The document is consumed so that a failure part way through never hands
    /// back a half-rewritten file.
    pub fn balance(&self, mut document: Document) -> Result<Outcome, CoreError> {
        let original = read_stats(&document)?;
        let flags = AbilityFlags::detect(&document);

        let balanced = balance::apply_balance(&mut document, original)?;

        let upgraded = abilities::is_upgraded(&document);
        let quantity = abilities::apply_quantity_range(&mut document, original.level, upgraded)?;

        let damage = DamageRange {
            min: balanced.min_damage,
            max: balanced.max_damage,
        };
        let corrected = abilities::corrected_damage(&document, &flags, damage)?;
        let reductions = abilities::reductions(&document, &flags)?;

        let base = combat::compute_values(
            balanced.attack,
            balanced.defense,
            balanced.hit_points,
            corrected.min,
            corrected.max,
            reductions.general_attack,
            reductions.enemy_defense,
        )?;
        let modifiers = abilities::present_modifiers(&document);
        let values = abilities::adjusted_values(base, &modifiers, original.speed);

        scanner::replace_scalar_field(&mut document, AI_VALUE_FIELD, values.ai_value);
        scanner::replace_scalar_field(&mut document, FIGHT_VALUE_FIELD, values.fight_value);

        info!(
            level = original.level,
            fight_value = values.fight_value,
            ai_value = values.ai_value,
            "balanced creature"
        );

        let report = BalanceReport {
            original,
            balanced,
            upgraded,
            quantity,
            corrected_damage: corrected,
            abilities: modifiers.iter().map(|m| m.name.to_string()).collect(),
            fight_value: values.fight_value,
            ai_value: values.ai_value,
        };
        Ok(Outcome { document, report })
    }
}

/// Reads the stats the balancer works from. The damage pair may be absent.
pub fn read_stats(document: &Document) -> Result<StatSnapshot, CoreError> {
    let level = scanner::locate_and_extract_int(document, LEVEL_FIELD)?;
    let defense = scanner::locate_and_extract_int(document, DEFENSE_FIELD)?;
    let attack = scanner::locate_and_extract_int(document, ATTACK_FIELD)?;
    let hit_points = scanner::locate_and_extract_int(document, HIT_POINTS_FIELD)?;
    let speed = scanner::locate_and_extract_int(document, SPEED_FIELD)?;
    let damage = scanner::locate_min_max_pair(document, DAMAGE_FIELD)?;
    Ok(StatSnapshot {
        level,
        attack,
        defense,
        hit_points,
        min_damage: damage.min,
        max_damage: damage.max,
        speed,
    })
}
