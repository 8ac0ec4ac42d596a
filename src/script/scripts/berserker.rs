//! Gets meaner as its own health drops

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// Strike and parry targets are a step function of remaining health.
/// Each band down trades defense for aggression; below a quarter health
/// it barely defends at all.
#[derive(Debug, Default)]
pub struct BerserkerScript;

impl CombatScript for BerserkerScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let health = context.self_health_percentage();

        let (strike_target, parry_target) = if health > 0.75 {
            (BodyPart::Torso, BodyPart::Head)
        } else if health > 0.5 {
            (BodyPart::Head, BodyPart::Torso)
        } else if health > 0.25 {
            (BodyPart::Head, BodyPart::Legs)
        } else {
            // Berserk: all-out head strikes, token defense every other turn
            let parry = if context.turn() % 2 == 0 {
                BodyPart::Legs
            } else {
                BodyPart::Head
            };
            (BodyPart::Head, parry)
        };

        Some(Action::new(strike_target, parry_target))
    }

    fn name(&self) -> &str {
        "Berserker"
    }

    fn description(&self) -> &str {
        "Becomes increasingly aggressive and reckless as health decreases. \
         Fights normally when healthy, but enters berserk mode when critically wounded."
    }
}
