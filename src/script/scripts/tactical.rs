//! Situation classification with per-situation action rules

use crate::combat::action::Action;
use crate::combat::body_part::BodyPart;
use crate::script::context::ScriptContext;
use crate::script::CombatScript;

/// How the script reads the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Situation {
    /// First few turns, information gathering
    EarlyGame,
    /// Clear health lead
    Winning,
    /// Clear health deficit
    Losing,
    /// Both sides near death
    CriticalBoth,
    /// No decisive signal
    Balanced,
}

fn assess(context: &ScriptContext) -> Situation {
    if context.turn() <= 3 {
        return Situation::EarlyGame;
    }

    let self_health = context.self_health_percentage();
    let opponent_health = context.opponent_health_percentage();
    let difference = self_health - opponent_health;

    if difference > 0.3 {
        Situation::Winning
    } else if difference < -0.3 {
        Situation::Losing
    } else if self_health < 0.3 && opponent_health < 0.3 {
        Situation::CriticalBoth
    } else {
        Situation::Balanced
    }
}

/// Classifies the turn (early-game, winning, losing, both-critical,
/// balanced) and dispatches to a per-category rule.
#[derive(Debug, Default)]
pub struct TacticalScript;

impl TacticalScript {
    fn winning(context: &ScriptContext) -> Action {
        // Keep the advantage; finish only when the opponent is nearly down
        let strike_target = if context.opponent_health_percentage() < 0.2 {
            BodyPart::Head
        } else {
            BodyPart::Torso
        };
        Action::new(strike_target, BodyPart::Head)
    }

    fn losing(context: &ScriptContext) -> Action {
        // Behind: need head damage. Severely behind: stop defending.
        let parry_target = if context.self_health_percentage() < 0.2 {
            BodyPart::Torso
        } else {
            BodyPart::Head
        };
        Action::new(BodyPart::Head, parry_target)
    }

    fn critical_both(context: &ScriptContext) -> Action {
        // Race to the kill, with an occasional safe swing
        let strike_target = if context.turn() % 2 == 0 {
            BodyPart::Torso
        } else {
            BodyPart::Head
        };
        Action::new(strike_target, BodyPart::Head)
    }

    fn balanced(context: &ScriptContext) -> Action {
        if let Some(last) = context.last_turn() {
            if last.damage_to_first > 0 || last.damage_to_second > 0 {
                // Blood was drawn last turn: guard the head
                return Action::new(BodyPart::Torso, BodyPart::Head);
            }
        }
        Action::new(BodyPart::Torso, BodyPart::Torso)
    }
}

impl CombatScript for TacticalScript {
    fn next_action(&mut self, context: &ScriptContext) -> Option<Action> {
        let action = match assess(context) {
            // Conservative start, gather information
            Situation::EarlyGame => Action::new(BodyPart::Torso, BodyPart::Head),
            Situation::Winning => Self::winning(context),
            Situation::Losing => Self::losing(context),
            Situation::CriticalBoth => Self::critical_both(context),
            Situation::Balanced => Self::balanced(context),
        };
        Some(action)
    }

    fn name(&self) -> &str {
        "Tactical"
    }

    fn description(&self) -> &str {
        "Classifies each turn into a tactical situation from health deltas \
         and turn number, then dispatches to a situation-specific rule."
    }
}
