pub mod game;
pub mod result;
pub mod stats;

pub use game::{BattleOutcome, BattlePhase, Game};
pub use result::{BattleResult, Side};
pub use stats::BattleStats;
