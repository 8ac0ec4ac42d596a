//! Script registry
//!
//! Maps script identifiers to boxed instances. Unknown identifiers are
//! rejected at construction time; nothing else in the crate can fail.

use crate::core::error::{DuelError, Result};
use crate::script::scripts::{
    AdaptiveScript, AggressiveScript, BalancedScript, BerserkerScript, CounterScript,
    DefensiveScript, RandomScript, TacticalScript,
};
use crate::script::CombatScript;

/// Identifiers accepted by [`create_script`]
pub const AVAILABLE_SCRIPTS: [&str; 8] = [
    "random",
    "aggressive",
    "defensive",
    "balanced",
    "adaptive",
    "counter",
    "berserker",
    "tactical",
];

/// Create a script by identifier (case-insensitive)
pub fn create_script(script_type: &str) -> Result<Box<dyn CombatScript>> {
    match script_type.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomScript::new())),
        "aggressive" => Ok(Box::new(AggressiveScript)),
        "defensive" => Ok(Box::new(DefensiveScript)),
        "balanced" => Ok(Box::new(BalancedScript)),
        "adaptive" => Ok(Box::new(AdaptiveScript)),
        "counter" => Ok(Box::new(CounterScript)),
        "berserker" => Ok(Box::new(BerserkerScript)),
        "tactical" => Ok(Box::new(TacticalScript)),
        _ => Err(DuelError::UnknownScript(script_type.to_string())),
    }
}

/// All identifiers accepted by [`create_script`]
pub fn available_scripts() -> &'static [&'static str] {
    &AVAILABLE_SCRIPTS
}

/// Default script assigned when no preference is given
pub fn default_script() -> Box<dyn CombatScript> {
    Box::new(RandomScript::new())
}

/// Whether an identifier would be accepted by [`create_script`]
pub fn is_script_available(script_type: &str) -> bool {
    AVAILABLE_SCRIPTS.contains(&script_type.to_lowercase().as_str())
}
