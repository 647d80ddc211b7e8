mod engine;
mod error;
mod types;

pub use engine::{
    AI_VALUE_FIELD, Engine, FIGHT_VALUE_FIELD, LEVEL_FIELD, Outcome, SPEED_FIELD, read_stats,
};
pub use error::{CoreError, CoreErrorCode};
pub use types::{BalanceReport, DamageRange, QuantityRange, StatSnapshot};
