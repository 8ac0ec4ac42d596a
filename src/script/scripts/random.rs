//! Uniformly random decisions from an owned, seedable RNG

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Picks strike and parry targets uniformly at random.
///
/// Owns its RNG so battles stay reproducible from seeds; the context is
/// otherwise ignored.
#[derive(Debug)]
pub struct RandomScript {
    rng: StdRng,
}

impl RandomScript {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create with a specific RNG seed for deterministic behavior
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_part(&mut self) -> BodyPart {
        let parts = BodyPart::all();
        parts[self.rng.gen_range(0..parts.len())]
    }
}

impl Default for RandomScript {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatScript for RandomScript {
    fn next_action(&mut self, _context: &ScriptContext) -> Option<Action> {
        Some(Action::new(self.random_part(), self.random_part()))
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn description(&self) -> &str {
        "Makes random combat decisions with no particular strategy. \
         Chooses strike targets and parry positions randomly."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::context::FighterView;

    fn context() -> ScriptContext<'static> {
        let view = FighterView {
            name: "F".to_string(),
            hit_points: 45,
            max_hit_points: 45,
            strength: 7,
            weapon_name: "Iron Sword".to_string(),
        };
        ScriptContext::new(view.clone(), view, 1, &[])
    }

    #[test]
    fn test_always_decides() {
        let mut script = RandomScript::with_seed(7);
        for _ in 0..50 {
            assert!(script.next_action(&context()).is_some());
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = RandomScript::with_seed(99);
        let mut b = RandomScript::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.next_action(&context()), b.next_action(&context()));
        }
    }

    #[test]
    fn test_eventually_covers_all_parts() {
        let mut script = RandomScript::with_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let action = script.next_action(&context()).unwrap();
            seen.insert(action.strike_target);
        }
        assert_eq!(seen.len(), BodyPart::all().len());
    }
}
