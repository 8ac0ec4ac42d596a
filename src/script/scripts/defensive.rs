//! Conservative strikes, rotating parry coverage

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Health threshold below which the script locks into pure survival
const DESPERATE_HEALTH: f64 = 0.3;

/// Strikes the torso for safe, moderate damage and keeps the head
/// covered. Only goes for the head when far ahead on health.
#[derive(Debug, Default)]
pub struct DefensiveScript;

impl CombatScript for DefensiveScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let mut strike_target = BodyPart::Torso;
        let mut parry_target = BodyPart::Head;

        let self_health = context.self_health_percentage();
        if self_health < DESPERATE_HEALTH {
            // Safe strikes only, head always covered
            strike_target = BodyPart::Torso;
            parry_target = BodyPart::Head;
        }

        // Strike for the kill only with a clear health advantage
        if self_health > 0.7 && context.opponent_health_percentage() < 0.5 {
            strike_target = BodyPart::Head;
        }

        // Rotate parry coverage after the opening turn
        if !context.is_first_turn() {
            parry_target = match context.turn() % 3 {
                0 => BodyPart::Head,
                1 => BodyPart::Torso,
                _ => BodyPart::Legs,
            };
        }

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Defensive"
    }

    fn description(&self) -> &str {
        "Prioritizes defense and survival, striking conservatively. \
         Rotates parry coverage and only attacks the head when clearly ahead."
    }
}
