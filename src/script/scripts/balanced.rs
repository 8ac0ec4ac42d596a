//! Even mix of offense and defense, tilted by the health gap

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Health lead (fractional) at which the script changes posture
const POSTURE_SHIFT_MARGIN: f64 = 0.2;

/// Torso/torso baseline; presses the attack when ahead, turtles when
/// behind, and cycles targets after the opening turn.
#[derive(Debug, Default)]
pub struct BalancedScript;

impl CombatScript for BalancedScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let mut strike_target = BodyPart::Torso;
        let mut parry_target = BodyPart::Torso;

        let self_health = context.self_health_percentage();
        let opponent_health = context.opponent_health_percentage();

        if self_health > opponent_health + POSTURE_SHIFT_MARGIN {
            // Ahead: press the attack
            strike_target = BodyPart::Head;
            parry_target = BodyPart::Torso;
        } else if self_health < opponent_health - POSTURE_SHIFT_MARGIN {
            // Behind: protect the head
            strike_target = BodyPart::Torso;
            parry_target = BodyPart::Head;
        }

        if !context.is_first_turn() && context.last_turn().is_some() {
            strike_target = match context.turn() % 3 {
                0 => BodyPart::Head,
                1 => BodyPart::Torso,
                _ => BodyPart::Legs,
            };
            parry_target = if context.turn() % 2 == 0 {
                BodyPart::Head
            } else {
                BodyPart::Torso
            };
        }

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Balanced"
    }

    fn description(&self) -> &str {
        "Uses a balanced mix of offensive and defensive tactics. \
         Adapts posture to the health gap and varies attack patterns."
    }
}
