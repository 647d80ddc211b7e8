//! Stat balancing and AI/Fight value calculation for VCMI creature definitions.
//!
//! Creature files are edited as plain line sequences: only the lines holding the
//! rewritten fields change, every other byte of the file is kept as it was.

pub mod abilities;
pub mod balance;
pub mod combat;
pub mod core_api;
pub mod document;
pub mod scanner;

pub use core_api::{CoreError, CoreErrorCode, Engine};
pub use document::Document;
