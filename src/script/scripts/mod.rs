pub mod adaptive;
pub mod aggressive;
pub mod balanced;
pub mod berserker;
pub mod counter;
pub mod defensive;
pub mod random;
pub mod tactical;

pub use adaptive::AdaptiveScript;
pub use aggressive::AggressiveScript;
pub use balanced::BalancedScript;
pub use berserker::BerserkerScript;
pub use counter::CounterScript;
pub use defensive::DefensiveScript;
pub use random::RandomScript;
pub use tactical::TacticalScript;
