//! Duelsim - Scripted Turn-Based Duel Simulator
//!
//! Two fighters exchange simultaneous strike/parry choices each turn.
//! Decisions come from pluggable combat scripts; resolution is pure
//! arithmetic over weapon stats, strength, and body-part multipliers,
//! with a single injected RNG for critical hits.

pub mod battle;
pub mod combat;
pub mod core;
pub mod script;
