//! Battle loop
//!
//! Each turn: snapshot state -> ask both scripts -> resolve -> record.
//! The loop and the resolver are the only writers of fighter health.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

use crate::battle::result::{BattleResult, Side};
use crate::battle::stats::BattleStats;
use crate::combat::action::FALLBACK_ACTION;
use crate::combat::fighter::Fighter;
use crate::combat::resolver::resolve_turn;
use crate::combat::turn::TurnOutcome;
use crate::core::config::{GameConfig, INTER_TURN_DELAY_MS};
use crate::script::context::{FighterView, ScriptContext};

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// How a battle concluded (or that it hasn't)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Undecided,
    Victory(Side),
    /// Both fighters fell in the same turn
    Draw,
    /// Turn limit exhausted with both fighters standing
    Timeout,
}

/// Orchestrates a duel between two fighters to completion.
///
/// Owns the fighters, the outcome history, and the battle RNG. Callers
/// can either step manually with [`execute_turn`](Game::execute_turn)
/// or drive to a result with [`run`](Game::run).
pub struct Game {
    first: Fighter,
    second: Fighter,
    config: GameConfig,
    history: Vec<TurnOutcome>,
    current_turn: u32,
    phase: BattlePhase,
    outcome: BattleOutcome,
    rng: ChaCha8Rng,
}

impl Game {
    /// Set up a battle between two fully-initialized fighters
    pub fn new(first: Fighter, second: Fighter, config: GameConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            first,
            second,
            config,
            history: Vec::new(),
            current_turn: 1,
            phase: BattlePhase::NotStarted,
            outcome: BattleOutcome::Undecided,
            rng,
        }
    }

    /// Execute one turn and record its outcome.
    ///
    /// Both scripts see identical pre-turn state. A script that cannot
    /// decide gets [`FALLBACK_ACTION`] substituted; a battle in
    /// progress is never aborted by a misbehaving script.
    pub fn execute_turn(&mut self) -> TurnOutcome {
        self.phase = BattlePhase::InProgress;

        let first_action = {
            let context = ScriptContext::new(
                FighterView::of(&self.first),
                FighterView::of(&self.second),
                self.current_turn,
                &self.history,
            );
            self.first
                .script_mut()
                .next_action(&context)
                .unwrap_or(FALLBACK_ACTION)
        };

        let second_action = {
            let context = ScriptContext::new(
                FighterView::of(&self.second),
                FighterView::of(&self.first),
                self.current_turn,
                &self.history,
            );
            self.second
                .script_mut()
                .next_action(&context)
                .unwrap_or(FALLBACK_ACTION)
        };

        let outcome = resolve_turn(
            &mut self.first,
            &first_action,
            &mut self.second,
            &second_action,
            &mut self.rng,
        );

        tracing::debug!(
            turn = self.current_turn,
            damage_to_first = outcome.damage_to_first,
            damage_to_second = outcome.damage_to_second,
            "turn resolved"
        );

        self.history.push(outcome.clone());
        self.current_turn += 1;
        self.check_for_conclusion();

        outcome
    }

    /// Run from the current state until a terminal condition.
    ///
    /// Terminates when a fighter falls, both fall (draw), or the turn
    /// limit is exhausted (timeout, no winner regardless of health).
    pub fn run(&mut self) -> BattleResult {
        while self.phase != BattlePhase::Finished && self.turns_fought() < self.config.max_turns {
            self.execute_turn();

            // Cosmetic pacing only; skipped after the final turn
            if self.config.inter_turn_delay
                && self.phase != BattlePhase::Finished
                && self.turns_fought() < self.config.max_turns
            {
                thread::sleep(Duration::from_millis(INTER_TURN_DELAY_MS));
            }
        }

        if self.phase != BattlePhase::Finished {
            self.outcome = BattleOutcome::Timeout;
            self.phase = BattlePhase::Finished;
        }

        let stats = BattleStats::from_history(&self.history);
        let winner = match self.outcome {
            BattleOutcome::Victory(side) => Some(side),
            _ => None,
        };
        let winner_name = winner.map(|side| self.fighter(side).name().to_string());
        let reached_turn_limit = self.outcome == BattleOutcome::Timeout;
        let summary = self.build_summary(winner, reached_turn_limit);

        BattleResult {
            winner,
            winner_name,
            total_turns: self.turns_fought(),
            history: self.history.clone(),
            stats,
            summary,
            reached_turn_limit,
        }
    }

    fn check_for_conclusion(&mut self) {
        let first_down = !self.first.is_alive();
        let second_down = !self.second.is_alive();

        if first_down || second_down {
            self.outcome = match (first_down, second_down) {
                (true, true) => BattleOutcome::Draw,
                (false, true) => BattleOutcome::Victory(Side::First),
                _ => BattleOutcome::Victory(Side::Second),
            };
            self.phase = BattlePhase::Finished;
        }
    }

    fn build_summary(&self, winner: Option<Side>, reached_turn_limit: bool) -> String {
        let turns = self.turns_fought();
        if reached_turn_limit {
            format!("BATTLE TIMEOUT! No winner after {turns} turns.")
        } else if let Some(side) = winner {
            format!(
                "WINNER: {} defeats {} in {turns} turns!",
                self.fighter(side).name(),
                self.fighter(side.opponent()).name()
            )
        } else {
            "DRAW! Both fighters have fallen!".to_string()
        }
    }

    /// Turns fully resolved so far
    pub fn turns_fought(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Mutable fighter access, e.g. for swapping scripts mid-duel
    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    pub fn first(&self) -> &Fighter {
        &self.first
    }

    pub fn second(&self) -> &Fighter {
        &self.second
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn max_turns(&self) -> u32 {
        self.config.max_turns
    }

    /// 1-based number of the next turn to execute
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn history(&self) -> &[TurnOutcome] {
        &self.history
    }
}
