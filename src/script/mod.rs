//! Combat script system
//!
//! Architecture: trait dispatch over interchangeable decision policies.
//! - `CombatScript` defines the interface for swappable strategies
//! - `ScriptContext` provides a read-only snapshot of battle state
//! - `factory` maps script names to boxed instances

pub mod context;
pub mod factory;
pub mod scripts;

pub use context::{FighterView, ScriptContext};
pub use factory::{available_scripts, create_script, default_script, is_script_available};

use crate::combat::action::Action;

/// A decision policy for one fighter.
///
/// `next_action` must work at turn 1 with an empty history and must not
/// depend on anything outside the context (scripts may keep an owned
/// seeded RNG; everything else is derived from the context each call).
/// Returning `None` means the script cannot decide; the battle loop
/// substitutes [`FALLBACK_ACTION`](crate::combat::FALLBACK_ACTION)
/// rather than aborting the battle.
pub trait CombatScript: std::fmt::Debug {
    /// Choose this turn's strike and parry targets
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action>;

    /// Short display name
    fn name(&self) -> &str;

    /// One or two sentences describing the tactics, display-only
    fn description(&self) -> &str;
}
