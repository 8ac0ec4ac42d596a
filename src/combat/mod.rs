pub mod action;
pub mod body_part;
pub mod fighter;
pub mod resolver;
pub mod turn;
pub mod weapon;

pub use action::{Action, FALLBACK_ACTION};
pub use body_part::BodyPart;
pub use fighter::Fighter;
pub use resolver::resolve_turn;
pub use turn::TurnOutcome;
pub use weapon::{StrikeDamage, Weapon};
