//! Team shuffling
//!
//! The random source is always passed in, so callers decide between an
//! OS-seeded generator and a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write;

/// Render `team_name` and a uniformly shuffled copy of `members`
///
/// The block is a `## <team_name>` header followed by one member per line,
/// each terminated by `\n`. `members` itself is left untouched.
pub fn shuffle_team<R>(team_name: &str, members: &[String], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let order = shuffled(members, rng);

    let mut block = format!("## {team_name}\n");
    for name in order {
        // Writing to a String cannot fail
        let _ = writeln!(block, "{name}");
    }
    block
}

/// Fisher-Yates shuffle of a private copy of `items`
pub fn shuffled<'a, T, R>(items: &'a [T], rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<&T> = items.iter().collect();
    order.shuffle(rng);
    order
}
