//! Percentage bonuses that abilities add to the fight value and AI value.
//!
//! Each present ability multiplies a value by `(100 + percent) / 100`. Entries with
//! a zero bonus are abilities whose worth is already priced into the damage model.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityModifier {
    pub name: &'static str,
    pub fight_percent: i32,
    pub ai_percent: i32,
}

impl AbilityModifier {
    pub fn fight_factor(&self) -> f64 {
        f64::from(100 + self.fight_percent) / 100.0
    }

    pub fn ai_factor(&self) -> f64 {
        f64::from(100 + self.ai_percent) / 100.0
    }
}

#[rustfmt::skip]
pub const ABILITY_MODIFIERS: &[AbilityModifier] = &[
    AbilityModifier { name: "NON_LIVING",                   fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "UNDEAD",                       fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "DRAGON_NATURE",                fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "KING1",                        fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "KING2",                        fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "KING3",                        fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "FEARLESS",                     fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "NO_LUCK",                      fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "NO_MORALE",                    fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "SELF_MORALE",                  fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "SELF_LUCK",                    fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "FLYING",                       fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "SHOOTER",                      fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "CHARGE_IMMUNITY",              fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "ADDITIONAL_ATTACK",            fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "UNLIMITED_RETALIATIONS",       fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "ADDITIONAL_RETALIATION",       fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "JOUSTING",                     fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "HATE",                         fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "SPELL_LIKE_ATTACK",            fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "THREE_HEADED_ATTACK",          fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "ATTACKS_ALL_ADJACENT",         fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "TWO_HEX_ATTACK_BREATH",        fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "RETURN_AFTER_STRIKE",          fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "ENEMY_DEFENCE_REDUCTION",      fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "GENERAL_DAMAGE_REDUCTION",     fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "GENERAL_ATTACK_REDUCTION",     fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "DEFENSIVE_STANCE",             fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "NO_DISTANCE_PENALTY",          fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "NO_MELEE_PENALTY",             fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "NO_WALL_PENALTY",              fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "FREE_SHOOTING",                fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "BLOCKS_RETALIATION",           fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "CATAPULT",                     fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "CHANGES_SPELL_COST_FOR_ALLY",  fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "CHANGES_SPELL_COST_FOR_ENEMY", fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "SPELL_RESISTANCE_AURA",        fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "HP_REGENERATION",              fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "FULL_HP_REGENERATION",         fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "MANA_DRAIN",                   fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "MANA_CHANNELING",              fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "LIFE_DRAIN",                   fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "DOUBLE_DAMAGE_CHANCE",         fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "FEAR",                         fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "HEALER",                       fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "FIRE_SHIELD",                  fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "MAGIC_MIRROR",                 fight_percent:   4, ai_percent:   4 },
    AbilityModifier { name: "ACID_BREATH",                  fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "DEATH_STARE",                  fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "SPELLCASTER",                  fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "ENCHANTER",                    fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "RANDOM_SPELLCASTER",           fight_percent:   4, ai_percent:   4 },
    AbilityModifier { name: "SPELL_AFTER_ATTACK",           fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "SPELL_BEFORE_ATTACK",          fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "CASTS",                        fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "SPECIFIC_SPELL_POWER",         fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "CREATURE_SPELL_POWER",         fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "CREATURE_ENCHANT_POWER",       fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "DAEMON_SUMMONING",             fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "REBIRTH",                      fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "ENCHANTED",                    fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "LEVEL_SPELL_IMMUNITY",         fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "MAGIC_RESISTANCE",             fight_percent:   5, ai_percent:   5 },
    AbilityModifier { name: "SPELL_DAMAGE_REDUCTION",       fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "MORE_DAMAGE_FROM_SPELL",       fight_percent:  -2, ai_percent:  -2 },
    AbilityModifier { name: "WATER_IMMUNITY",               fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "EARTH_IMMUNITY",               fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "AIR_IMMUNITY",                 fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "MIND_IMMUNITY",                fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "SPELL_IMMUNITY",               fight_percent:   1, ai_percent:   1 },
    AbilityModifier { name: "DIRECT_DAMAGE_IMMUNITY",       fight_percent:  10, ai_percent:  10 },
    AbilityModifier { name: "RECEPTIVE",                    fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "POISON",                       fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "SLAYER",                       fight_percent:   3, ai_percent:   3 },
    AbilityModifier { name: "BIND_EFFECT",                  fight_percent:   0, ai_percent:   0 },
    AbilityModifier { name: "FORGETFULL",                   fight_percent:  -7, ai_percent:  -7 },
    AbilityModifier { name: "NOT_ACTIVE",                   fight_percent: -10, ai_percent: -10 },
    AbilityModifier { name: "ALWAYS_MINIMUM_DAMAGE",        fight_percent:  -5, ai_percent:  -5 },
    AbilityModifier { name: "ALWAYS_MAXIMUM_DAMAGE",        fight_percent:   7, ai_percent:   7 },
    AbilityModifier { name: "ATTACKS_NEAREST_CREATURE",     fight_percent:  -5, ai_percent:  -5 },
    AbilityModifier { name: "IN_FRENZY",                    fight_percent:   2, ai_percent:   2 },
    AbilityModifier { name: "HYPNOTIZED",                   fight_percent: -10, ai_percent: -10 },
];
