//! Turn resolution
//!
//! Both directions are evaluated simultaneously from pre-turn state:
//! an exact parry match blocks a strike entirely, otherwise the weapon
//! rolls damage. Health is mutated here and nowhere else.

use rand::Rng;
use std::fmt::Write;

use crate::combat::action::Action;
use crate::combat::fighter::Fighter;
use crate::combat::turn::TurnOutcome;

/// Resolve one turn of combat, applying damage to both fighters.
///
/// A strike lands unless the defender's parry target equals the
/// attacker's strike target. Each direction is independent; neither
/// dying nor taking damage this turn affects the other direction.
pub fn resolve_turn(
    first: &mut Fighter,
    first_action: &Action,
    second: &mut Fighter,
    second_action: &Action,
    rng: &mut impl Rng,
) -> TurnOutcome {
    let mut description = String::new();

    let _ = writeln!(description, "{}: {}", first.name(), first_action);
    let _ = writeln!(description, "{}: {}", second.name(), second_action);
    let _ = writeln!(description);

    // Both strikes computed against pre-turn state before any damage
    // is applied, preserving simultaneity.
    let first_strike = if first_action.strike_target != second_action.parry_target {
        Some(
            first
                .weapon()
                .calculate_damage(first_action.strike_target, first.strength(), rng),
        )
    } else {
        None
    };

    let second_strike = if second_action.strike_target != first_action.parry_target {
        Some(
            second
                .weapon()
                .calculate_damage(second_action.strike_target, second.strength(), rng),
        )
    } else {
        None
    };

    let damage_to_second = first_strike.map_or(0, |s| s.amount);
    let damage_to_first = second_strike.map_or(0, |s| s.amount);
    let first_critical = first_strike.is_some_and(|s| s.critical);
    let second_critical = second_strike.is_some_and(|s| s.critical);

    second.take_damage(damage_to_second);
    first.take_damage(damage_to_first);

    match first_strike {
        Some(strike) => {
            let _ = writeln!(
                description,
                "{} strikes {}'s {} for {} damage{}!",
                first.name(),
                second.name(),
                first_action.strike_target,
                strike.amount,
                if strike.critical { " (CRITICAL HIT)" } else { "" }
            );
        }
        None => {
            let _ = writeln!(
                description,
                "{}'s strike to {} is parried by {}!",
                first.name(),
                first_action.strike_target,
                second.name()
            );
        }
    }

    match second_strike {
        Some(strike) => {
            let _ = writeln!(
                description,
                "{} strikes {}'s {} for {} damage{}!",
                second.name(),
                first.name(),
                second_action.strike_target,
                strike.amount,
                if strike.critical { " (CRITICAL HIT)" } else { "" }
            );
        }
        None => {
            let _ = writeln!(
                description,
                "{}'s strike to {} is parried by {}!",
                second.name(),
                second_action.strike_target,
                first.name()
            );
        }
    }

    let _ = writeln!(description);
    let _ = writeln!(
        description,
        "{}: {}/{} HP",
        first.name(),
        first.hit_points(),
        first.max_hit_points()
    );
    let _ = writeln!(
        description,
        "{}: {}/{} HP",
        second.name(),
        second.hit_points(),
        second.max_hit_points()
    );

    TurnOutcome {
        damage_to_first,
        damage_to_second,
        first_critical,
        second_critical,
        description,
    }
}
