//! Weapon stats and damage calculation
//!
//! The critical-hit roll here is the only randomness in the whole
//! resolution path. The RNG is injected by the caller so battles are
//! reproducible from a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::body_part::BodyPart;

/// Outcome of a single damage calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeDamage {
    /// Final damage, rounded to the nearest integer
    pub amount: u32,
    /// Whether the crit roll doubled the raw damage
    pub critical: bool,
}

/// An immutable weapon: name, base damage, critical-hit chance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    base_damage: u32,
    crit_chance: f64,
}

impl Weapon {
    /// Create a weapon. Crit chance is clamped to [0, 1].
    pub fn new(name: impl Into<String>, base_damage: u32, crit_chance: f64) -> Self {
        Self {
            name: name.into(),
            base_damage,
            crit_chance: crit_chance.clamp(0.0, 1.0),
        }
    }

    /// Calculate damage for a strike on `target`.
    ///
    /// `(base_damage + strength) * multiplier`, doubled if the crit roll
    /// succeeds, rounded half away from zero.
    pub fn calculate_damage(
        &self,
        target: BodyPart,
        strength: u32,
        rng: &mut impl Rng,
    ) -> StrikeDamage {
        let raw = (self.base_damage + strength) as f64 * target.multiplier();
        let critical = rng.gen::<f64>() < self.crit_chance;
        let scaled = if critical { raw * 2.0 } else { raw };
        StrikeDamage {
            amount: scaled.round() as u32,
            critical,
        }
    }

    /// Damage this weapon deals on `target` when the crit roll fails
    pub fn expected_damage(&self, target: BodyPart, strength: u32) -> u32 {
        ((self.base_damage + strength) as f64 * target.multiplier()).round() as u32
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn crit_chance(&self) -> f64 {
        self.crit_chance
    }

    /// Common weapon: reliable all-rounder
    pub fn iron_sword() -> Self {
        Self::new("Iron Sword", 10, 0.15)
    }

    /// Common weapon: heavier hits, fewer crits
    pub fn battle_axe() -> Self {
        Self::new("Battle Axe", 12, 0.10)
    }

    /// Common weapon: weak but crit-happy
    pub fn dagger() -> Self {
        Self::new("Dagger", 6, 0.30)
    }

    /// Common weapon: raw damage, crits are an afterthought
    pub fn warhammer() -> Self {
        Self::new("Warhammer", 15, 0.05)
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Base: {}, Crit: {:.1}%)",
            self.name,
            self.base_damage,
            self.crit_chance * 100.0
        )
    }
}
