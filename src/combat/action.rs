//! A fighter's chosen strike and parry for one turn

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::body_part::BodyPart;

/// Substituted by the battle loop when a script cannot decide.
///
/// Part of the fault-isolation contract: a misbehaving script never
/// aborts an in-progress battle.
pub const FALLBACK_ACTION: Action = Action {
    strike_target: BodyPart::Torso,
    parry_target: BodyPart::Torso,
};

/// Immutable strike/parry pair. Striking and parrying the same part
/// is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub strike_target: BodyPart,
    pub parry_target: BodyPart,
}

impl Action {
    pub fn new(strike_target: BodyPart, parry_target: BodyPart) -> Self {
        Self {
            strike_target,
            parry_target,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Strike: {}, Parry: {}",
            self.strike_target, self.parry_target
        )
    }
}
