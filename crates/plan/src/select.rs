use std::collections::HashSet;

use mealdraft_catalog::Meal;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

pub const DEFAULT_PLAN_SIZE: usize = 5;

/// Draw up to `count` meals at random, avoiding excluded ids (the last
/// accepted plan). When the exclusions leave fewer than `count` candidates,
/// the draw falls back to the full catalog.
///
/// The rng is passed in so callers can seed it; see the tests.
pub fn draw_plan(
    meals: &[Meal],
    count: usize,
    exclude: &HashSet<String>,
    rng: &mut impl Rng,
) -> Vec<Meal> {
    let mut pool: Vec<&Meal> = meals.iter().filter(|m| !exclude.contains(&m.id)).collect();
    if pool.len() < count {
        pool = meals.iter().collect();
    }

    pool.shuffle(rng);
    pool.into_iter().take(count).cloned().collect()
}

/// Pick a random meal that is not already selected, for the per-card
/// refresh. `None` when every catalog meal is already on the board.
pub fn replacement_for(meals: &[Meal], selected: &[Meal], rng: &mut impl Rng) -> Option<Meal> {
    let current: HashSet<&str> = selected.iter().map(|m| m.id.as_str()).collect();
    let pool: Vec<&Meal> = meals
        .iter()
        .filter(|m| !current.contains(m.id.as_str()))
        .collect();

    pool.choose(rng).map(|m| (*m).clone())
}
