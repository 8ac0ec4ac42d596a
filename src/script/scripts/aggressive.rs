//! Always hunts the head, with turn-indexed variation

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Strikes the highest-multiplier part every turn, dropping to the
/// torso on every third turn to stay less predictable.
#[derive(Debug, Default)]
pub struct AggressiveScript;

impl CombatScript for AggressiveScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let mut strike_target = BodyPart::Head;
        let mut parry_target = BodyPart::Head;

        if !context.is_first_turn() {
            if context.turn() % 3 == 0 {
                strike_target = BodyPart::Torso;
            }
            if context.turn() % 2 == 0 {
                parry_target = BodyPart::Torso;
            }
        }

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Aggressive"
    }

    fn description(&self) -> &str {
        "Always strikes aggressively, preferring high-damage targets like the head. \
         Varies strikes and parries on a turn cycle to stay unpredictable."
    }
}
