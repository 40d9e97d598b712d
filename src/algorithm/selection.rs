//! Elitist roulette-wheel selection over ranked routes

use crate::algorithm::population::RankedRoute;
use crate::math::distribution::{cumulative_percentages, first_exceeding};
use rand::Rng;
use rand::rngs::StdRng;

/// Build the mating pool for one generation
///
/// The first `elite_size` ranked entries are retained unconditionally. The
/// remaining slots are drawn independently from a roulette wheel whose raw
/// weights are the ranked route costs, cumulative-summed and normalized to
/// a 0–100 scale; each spin takes the first entry whose cumulative
/// percentage exceeds the pick. An individual may be selected more than
/// once. Returns population indices.
pub fn select_mating_pool(
    ranked: &[RankedRoute],
    elite_size: usize,
    rng: &mut StdRng,
) -> Vec<usize> {
    let weights: Vec<f64> = ranked.iter().map(|entry| entry.cost).collect();
    let cumulative = cumulative_percentages(&weights);

    let mut pool: Vec<usize> = ranked
        .iter()
        .take(elite_size)
        .map(|entry| entry.index)
        .collect();

    let free_slots = ranked.len().saturating_sub(elite_size);
    for _ in 0..free_slots {
        let pick = rng.random::<f64>() * 100.0;
        let position = first_exceeding(&cumulative, pick);
        if let Some(entry) = ranked.get(position) {
            pool.push(entry.index);
        }
    }

    pool
}
