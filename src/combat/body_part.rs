//! Body parts that can be struck or parried
//!
//! The multiplier set is fixed: head hits hurt, leg hits don't.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Targetable zones, each with a fixed damage multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    /// Highest damage (1.5x)
    Head,
    /// Baseline damage (1.0x)
    Torso,
    /// Lowest damage (0.7x)
    Legs,
}

impl BodyPart {
    /// Returns all body parts in fixed order
    pub fn all() -> [BodyPart; 3] {
        [BodyPart::Head, BodyPart::Torso, BodyPart::Legs]
    }

    /// Damage multiplier applied to strikes landing on this part
    pub fn multiplier(&self) -> f64 {
        match self {
            BodyPart::Head => 1.5,
            BodyPart::Torso => 1.0,
            BodyPart::Legs => 0.7,
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::Legs => "legs",
        };
        write!(f, "{}", name)
    }
}
