//! Immutable record of one resolved turn

use serde::{Deserialize, Serialize};

/// What happened in a single turn, from both directions.
///
/// Crit flags are attributed to the striker: `first_critical` means the
/// first fighter landed a critical hit on the second. A parried strike
/// never sets a crit flag. Appended to the battle history and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Damage applied to the first fighter (dealt by the second)
    pub damage_to_first: u32,
    /// Damage applied to the second fighter (dealt by the first)
    pub damage_to_second: u32,
    /// First fighter's strike was a critical hit
    pub first_critical: bool,
    /// Second fighter's strike was a critical hit
    pub second_critical: bool,
    /// Narrative text: both actions, what landed or was parried, and
    /// end-of-turn health totals
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_plain_data() {
        let outcome = TurnOutcome {
            damage_to_first: 0,
            damage_to_second: 15,
            first_critical: false,
            second_critical: false,
            description: "one-sided".to_string(),
        };
        let copy = outcome.clone();
        assert_eq!(outcome, copy);
    }
}
