//! Read-only battle snapshot handed to scripts each turn
//!
//! Fighter state is copied by value so a script cannot mutate anything
//! it observes; the history is a shared immutable borrow.

use crate::combat::fighter::Fighter;
use crate::combat::turn::TurnOutcome;

/// By-value copy of the fighter fields a script may observe
#[derive(Debug, Clone, PartialEq)]
pub struct FighterView {
    pub name: String,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub strength: u32,
    pub weapon_name: String,
}

impl FighterView {
    pub fn of(fighter: &Fighter) -> Self {
        Self {
            name: fighter.name().to_string(),
            hit_points: fighter.hit_points(),
            max_hit_points: fighter.max_hit_points(),
            strength: fighter.strength(),
            weapon_name: fighter.weapon().name().to_string(),
        }
    }

    /// Current health as a fraction of maximum, in [0, 1]
    pub fn health_percentage(&self) -> f64 {
        self.hit_points as f64 / self.max_hit_points as f64
    }
}

/// Per-turn decision context: own and opponent state, the 1-based turn
/// number, and every prior turn's outcome. Constructed fresh each turn
/// from pre-turn state.
pub struct ScriptContext<'a> {
    own: FighterView,
    opponent: FighterView,
    turn: u32,
    history: &'a [TurnOutcome],
}

impl<'a> ScriptContext<'a> {
    pub fn new(
        own: FighterView,
        opponent: FighterView,
        turn: u32,
        history: &'a [TurnOutcome],
    ) -> Self {
        Self {
            own,
            opponent,
            turn,
            history,
        }
    }

    pub fn own(&self) -> &FighterView {
        &self.own
    }

    pub fn opponent(&self) -> &FighterView {
        &self.opponent
    }

    /// Current turn number (1-based)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn history(&self) -> &[TurnOutcome] {
        self.history
    }

    pub fn is_first_turn(&self) -> bool {
        self.turn == 1
    }

    /// Most recent outcome, `None` on turn 1
    pub fn last_turn(&self) -> Option<&TurnOutcome> {
        self.history.last()
    }

    pub fn self_health_percentage(&self) -> f64 {
        self.own.health_percentage()
    }

    pub fn opponent_health_percentage(&self) -> f64 {
        self.opponent.health_percentage()
    }
}
