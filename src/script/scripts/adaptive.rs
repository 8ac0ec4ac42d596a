//! Observation-driven target selection
//!
//! The context never reveals realized opponent actions, so the
//! observation counters are built from derivable signals only (turn
//! parity over the recorded history). Counters are rebuilt from the
//! context on every call; the script itself holds no state.

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Per-part observation counts, indexed in `BodyPart::all()` order
#[derive(Debug, Default)]
struct Observations {
    strikes: [u32; 3],
    parries: [u32; 3],
}

impl Observations {
    fn from_context(context: &ScriptContext) -> Self {
        let mut observations = Self::default();

        // Attribute an assumed target to the opponent from the history
        // length's position in a three-turn cycle.
        let turns = context.history().len();
        if turns > 0 {
            let assumed = match turns % 3 {
                0 => BodyPart::Head,
                1 => BodyPart::Torso,
                _ => BodyPart::Legs,
            };
            let index = part_index(assumed);
            observations.strikes[index] += 1;
            observations.parries[index] += 1;
        }

        observations
    }

    /// Part the opponent defends least, ties broken in `all()` order
    fn least_parried(&self) -> BodyPart {
        let mut best = BodyPart::Head;
        let mut best_count = u32::MAX;
        for part in BodyPart::all() {
            let count = self.parries[part_index(part)];
            if count < best_count {
                best_count = count;
                best = part;
            }
        }
        best
    }

    /// Part the opponent attacks most, `None` with no observations
    fn most_struck(&self) -> Option<BodyPart> {
        let mut best = None;
        let mut best_count = 0;
        for part in BodyPart::all() {
            let count = self.strikes[part_index(part)];
            if count > best_count {
                best_count = count;
                best = Some(part);
            }
        }
        best
    }
}

fn part_index(part: BodyPart) -> usize {
    match part {
        BodyPart::Head => 0,
        BodyPart::Torso => 1,
        BodyPart::Legs => 2,
    }
}

/// Strikes where the opponent parries least and defends where they
/// attack most, with health-based overrides at the extremes.
#[derive(Debug, Default)]
pub struct AdaptiveScript;

impl CombatScript for AdaptiveScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let observations = Observations::from_context(context);

        let mut strike_target = observations.least_parried();
        let mut parry_target = observations.most_struck().unwrap_or(BodyPart::Torso);

        let self_health = context.self_health_percentage();
        let opponent_health = context.opponent_health_percentage();

        if self_health < 0.3 && opponent_health > 0.5 {
            // Desperate: all-in on high damage
            strike_target = BodyPart::Head;
            parry_target = BodyPart::Head;
        } else if self_health > 0.7 && opponent_health < 0.3 {
            // Comfortably ahead: safe strikes, guard the likely target
            strike_target = BodyPart::Torso;
            parry_target = observations.most_struck().unwrap_or(BodyPart::Head);
        }

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Adaptive"
    }

    fn description(&self) -> &str {
        "Learns from opponent behavior patterns and adapts strategy accordingly. \
         Strikes where the opponent parries least and defends where they strike most."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::turn::TurnOutcome;
    use crate::script::context::FighterView;

    fn view(hp: u32) -> FighterView {
        FighterView {
            name: "F".to_string(),
            hit_points: hp,
            max_hit_points: 100,
            strength: 7,
            weapon_name: "Iron Sword".to_string(),
        }
    }

    fn outcomes(count: usize) -> Vec<TurnOutcome> {
        (0..count)
            .map(|_| TurnOutcome {
                damage_to_first: 5,
                damage_to_second: 5,
                first_critical: false,
                second_critical: false,
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_empty_history_strikes_first_unobserved_part() {
        let context = ScriptContext::new(view(100), view(100), 1, &[]);
        let action = AdaptiveScript.next_action(&context).unwrap();
        assert_eq!(action.strike_target, BodyPart::Head);
        assert_eq!(action.parry_target, BodyPart::Torso);
    }

    #[test]
    fn test_parries_assumed_opponent_target() {
        // One recorded turn: 1 % 3 == 1 -> torso assumed; strike moves
        // to an unobserved part, parry follows the observation.
        let history = outcomes(1);
        let context = ScriptContext::new(view(100), view(100), 2, &history);
        let action = AdaptiveScript.next_action(&context).unwrap();
        assert_eq!(action.parry_target, BodyPart::Torso);
        assert_ne!(action.strike_target, BodyPart::Torso);
    }

    #[test]
    fn test_desperate_override() {
        let context = ScriptContext::new(view(20), view(80), 5, &[]);
        let action = AdaptiveScript.next_action(&context).unwrap();
        assert_eq!(action.strike_target, BodyPart::Head);
        assert_eq!(action.parry_target, BodyPart::Head);
    }

    #[test]
    fn test_winning_override_plays_safe() {
        let context = ScriptContext::new(view(90), view(20), 5, &[]);
        let action = AdaptiveScript.next_action(&context).unwrap();
        assert_eq!(action.strike_target, BodyPart::Torso);
    }
}
