//! Pattern-countering via turn cadence
//!
//! Realized opponent choices are not exposed by the context, so this
//! counters an assumed three-turn cadence instead of observed actions.

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Rotates strike/parry pairs against an assumed opponent cycle,
/// switching to head strikes when desperate.
#[derive(Debug, Default)]
pub struct CounterScript;

impl CombatScript for CounterScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let mut strike_target = BodyPart::Torso;
        let mut parry_target = BodyPart::Head;

        if !context.is_first_turn() {
            match context.turn() % 3 {
                0 => {
                    strike_target = BodyPart::Head;
                    parry_target = BodyPart::Torso;
                }
                1 => {
                    strike_target = BodyPart::Torso;
                    parry_target = BodyPart::Legs;
                }
                _ => {
                    strike_target = BodyPart::Legs;
                    parry_target = BodyPart::Head;
                }
            }
        }

        // Desperate: nothing left to protect, swing for maximum damage
        if context.self_health_percentage() < 0.25 {
            strike_target = BodyPart::Head;
        }

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Counter"
    }

    fn description(&self) -> &str {
        "Reacts to assumed opponent patterns by countering their cadence. \
         Rotates its own targets out of phase and gambles on head strikes when desperate."
    }
}
