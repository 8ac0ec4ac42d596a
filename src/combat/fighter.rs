//! A duelist: health, strength, weapon, and an assigned combat script

use std::fmt;

use crate::combat::weapon::Weapon;
use crate::script::CombatScript;

/// One of the two combatants.
///
/// Health only ever decreases, via `take_damage` (floored at 0). The
/// script can be swapped at runtime; everything else is fixed at
/// creation.
pub struct Fighter {
    name: String,
    hit_points: u32,
    max_hit_points: u32,
    strength: u32,
    weapon: Weapon,
    script: Box<dyn CombatScript>,
}

impl Fighter {
    /// Create a fighter at full health
    pub fn new(
        name: impl Into<String>,
        hit_points: u32,
        strength: u32,
        weapon: Weapon,
        script: Box<dyn CombatScript>,
    ) -> Self {
        Self {
            name: name.into(),
            hit_points,
            max_hit_points: hit_points,
            strength,
            weapon,
            script,
        }
    }

    /// Apply damage, flooring health at 0
    pub fn take_damage(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_sub(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Current health as a fraction of maximum, in [0, 1]
    pub fn health_percentage(&self) -> f64 {
        self.hit_points as f64 / self.max_hit_points as f64
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn max_hit_points(&self) -> u32 {
        self.max_hit_points
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn script(&self) -> &dyn CombatScript {
        self.script.as_ref()
    }

    pub fn script_mut(&mut self) -> &mut dyn CombatScript {
        self.script.as_mut()
    }

    /// Replace the assigned script mid-duel
    pub fn set_script(&mut self, script: Box<dyn CombatScript>) {
        self.script = script;
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP: {}/{}, Str: {}, Weapon: {})",
            self.name,
            self.hit_points,
            self.max_hit_points,
            self.strength,
            self.weapon.name()
        )
    }
}

impl fmt::Debug for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fighter")
            .field("name", &self.name)
            .field("hit_points", &self.hit_points)
            .field("max_hit_points", &self.max_hit_points)
            .field("strength", &self.strength)
            .field("weapon", &self.weapon)
            .field("script", &self.script.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::factory::create_script;

    fn test_fighter() -> Fighter {
        Fighter::new(
            "Kael",
            45,
            7,
            Weapon::iron_sword(),
            create_script("aggressive").unwrap(),
        )
    }

    #[test]
    fn test_starts_at_full_health() {
        let fighter = test_fighter();
        assert_eq!(fighter.hit_points(), fighter.max_hit_points());
        assert!(fighter.is_alive());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut fighter = test_fighter();
        fighter.take_damage(100);
        assert_eq!(fighter.hit_points(), 0);
        assert!(!fighter.is_alive());
    }

    #[test]
    fn test_health_percentage() {
        let mut fighter = test_fighter();
        fighter.take_damage(9);
        assert!((fighter.health_percentage() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_set_script() {
        let mut fighter = test_fighter();
        assert_eq!(fighter.script().name(), "Aggressive");
        fighter.set_script(create_script("defensive").unwrap());
        assert_eq!(fighter.script().name(), "Defensive");
    }

    #[test]
    fn test_display() {
        let fighter = test_fighter();
        assert_eq!(
            fighter.to_string(),
            "Kael (HP: 45/45, Str: 7, Weapon: Iron Sword)"
        );
    }
}
