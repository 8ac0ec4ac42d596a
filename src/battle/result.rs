//! Final battle report

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::battle::stats::BattleStats;
use crate::combat::turn::TurnOutcome;

/// Identifies one of the two fighters in results and outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Everything known about a finished battle.
///
/// `winner` is `None` on a draw or timeout; `reached_turn_limit`
/// distinguishes the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: Option<Side>,
    pub winner_name: Option<String>,
    pub total_turns: u32,
    pub history: Vec<TurnOutcome>,
    pub stats: BattleStats,
    pub summary: String,
    pub reached_turn_limit: bool,
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}
