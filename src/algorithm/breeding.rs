//! Ordered crossover and swap mutation over route permutations

use crate::algorithm::population::Individual;
use bitvec::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Ordered crossover of two parent routes
///
/// Copies the segment between two random cut points from the first parent
/// verbatim, then appends the second parent's nodes in their original
/// order, skipping nodes the segment already holds. The child is a valid
/// permutation whenever both parents are, by construction.
pub fn ordered_crossover(first: &[usize], second: &[usize], rng: &mut StdRng) -> Vec<usize> {
    let len = first.len();
    if len == 0 {
        return Vec::new();
    }

    let cut_a = rng.random_range(0..len);
    let cut_b = rng.random_range(0..len);
    let start = cut_a.min(cut_b);
    let end = cut_a.max(cut_b);
    let segment = first.get(start..end).unwrap_or_default();

    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(segment);

    let mut in_segment = bitvec![0; len];
    for &node in segment {
        if let Some(mut slot) = in_segment.get_mut(node) {
            *slot = true;
        }
    }
    for &node in second {
        if in_segment.get(node).as_deref() != Some(&true) {
            child.push(node);
        }
    }

    child
}

/// Breed the next generation from a mating pool
///
/// The pool is shuffled once per generation. The first `elite_size` pool
/// entries pass through unmodified; every remaining child is an ordered
/// crossover of a front entry of the shuffled pool and its
/// mirrored-from-the-back counterpart.
pub fn breed_generation(pool: &[Individual], elite_size: usize, rng: &mut StdRng) -> Vec<Individual> {
    let mut shuffled: Vec<&Individual> = pool.iter().collect();
    shuffled.shuffle(rng);

    let mut children: Vec<Individual> = pool.iter().take(elite_size).cloned().collect();
    let remaining = pool.len().saturating_sub(elite_size);
    for offset in 0..remaining {
        let front = shuffled.get(offset);
        let back = shuffled.get(pool.len() - 1 - offset);
        if let Some((first, second)) = front.zip(back) {
            let route = ordered_crossover(first.route(), second.route(), rng);
            children.push(Individual::from_route(route));
        }
    }

    children
}

/// Swap mutation applied gene by gene
///
/// Each position swaps with a uniformly random position with probability
/// `mutation_rate`; a position may draw itself and no-op.
pub fn mutate_route(route: &mut [usize], mutation_rate: f64, rng: &mut StdRng) {
    let len = route.len();
    if len == 0 {
        return;
    }
    for position in 0..len {
        if rng.random::<f64>() < mutation_rate {
            let other = rng.random_range(0..len);
            route.swap(position, other);
        }
    }
}
