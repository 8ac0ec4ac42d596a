//! Aggregate statistics over a battle's turn history

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::turn::TurnOutcome;

/// Per-fighter totals derived purely from the outcome history.
///
/// A successful strike is one that dealt damage (parried strikes don't
/// count); critical hits are only counted on strikes that landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleStats {
    pub total_damage_by_first: u32,
    pub total_damage_by_second: u32,
    pub successful_strikes_by_first: u32,
    pub successful_strikes_by_second: u32,
    pub critical_hits_by_first: u32,
    pub critical_hits_by_second: u32,
    /// Combined damage from both sides divided by turns fought,
    /// 0.0 for a zero-turn battle
    pub average_damage_per_turn: f64,
}

impl BattleStats {
    /// Compute stats once from the full turn history
    pub fn from_history(history: &[TurnOutcome]) -> Self {
        let mut stats = Self {
            total_damage_by_first: 0,
            total_damage_by_second: 0,
            successful_strikes_by_first: 0,
            successful_strikes_by_second: 0,
            critical_hits_by_first: 0,
            critical_hits_by_second: 0,
            average_damage_per_turn: 0.0,
        };

        for turn in history {
            stats.total_damage_by_first += turn.damage_to_second;
            if turn.damage_to_second > 0 {
                stats.successful_strikes_by_first += 1;
                if turn.first_critical {
                    stats.critical_hits_by_first += 1;
                }
            }

            stats.total_damage_by_second += turn.damage_to_first;
            if turn.damage_to_first > 0 {
                stats.successful_strikes_by_second += 1;
                if turn.second_critical {
                    stats.critical_hits_by_second += 1;
                }
            }
        }

        if !history.is_empty() {
            let combined = stats.total_damage_by_first + stats.total_damage_by_second;
            stats.average_damage_per_turn = combined as f64 / history.len() as f64;
        }

        stats
    }
}

impl fmt::Display for BattleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battle Statistics:")?;
        writeln!(
            f,
            "- Fighter 1: {} damage dealt, {} successful strikes, {} critical hits",
            self.total_damage_by_first,
            self.successful_strikes_by_first,
            self.critical_hits_by_first
        )?;
        writeln!(
            f,
            "- Fighter 2: {} damage dealt, {} successful strikes, {} critical hits",
            self.total_damage_by_second,
            self.successful_strikes_by_second,
            self.critical_hits_by_second
        )?;
        write!(
            f,
            "- Average damage per turn: {:.1}",
            self.average_damage_per_turn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(
        damage_to_first: u32,
        damage_to_second: u32,
        first_critical: bool,
        second_critical: bool,
    ) -> TurnOutcome {
        TurnOutcome {
            damage_to_first,
            damage_to_second,
            first_critical,
            second_critical,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let stats = BattleStats::from_history(&[]);
        assert_eq!(stats.total_damage_by_first, 0);
        assert_eq!(stats.successful_strikes_by_second, 0);
        assert_eq!(stats.average_damage_per_turn, 0.0);
    }

    #[test]
    fn test_totals_match_history_sums() {
        let history = vec![
            turn(10, 15, true, false),
            turn(0, 23, true, false),
            turn(11, 0, false, false),
        ];
        let stats = BattleStats::from_history(&history);

        assert_eq!(stats.total_damage_by_first, 38);
        assert_eq!(stats.total_damage_by_second, 21);
        assert_eq!(stats.successful_strikes_by_first, 2);
        assert_eq!(stats.successful_strikes_by_second, 2);
        assert_eq!(stats.critical_hits_by_first, 2);
        assert_eq!(stats.critical_hits_by_second, 0);
        assert!((stats.average_damage_per_turn - 59.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_parried_turns_count_no_strikes() {
        let history = vec![turn(0, 0, false, false); 5];
        let stats = BattleStats::from_history(&history);
        assert_eq!(stats.successful_strikes_by_first, 0);
        assert_eq!(stats.successful_strikes_by_second, 0);
        assert_eq!(stats.average_damage_per_turn, 0.0);
    }

    #[test]
    fn test_display() {
        let stats = BattleStats::from_history(&[turn(5, 10, false, false)]);
        let text = stats.to_string();
        assert!(text.contains("Fighter 1: 10 damage dealt"));
        assert!(text.contains("Average damage per turn: 15.0"));
    }
}
