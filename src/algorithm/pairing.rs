//! Greedy pairing of vertical photographs into combined slides
//!
//! Works through the photos in input order and joins each unpaired photo
//! with the remaining candidate sharing the fewest tags, so merged slides
//! carry the most diverse tag sets the greedy scan can find.

use crate::io::configuration::PAIR_SCAN_LIMIT;
use crate::io::error::{Result, SlideshowError};
use crate::model::photo::Photo;
use crate::model::slide::Slide;
use bitvec::prelude::*;

/// Pair every vertical photo with a partner, consuming each exactly once
///
/// Candidates are scanned in input order and ties keep the first
/// encountered. The inner scan inspects at most [`PAIR_SCAN_LIMIT`]
/// candidates per photo; once the cap is hit the best candidate found so
/// far is accepted even if a lower-overlap one lies further on.
///
/// # Errors
///
/// Returns `PairingExhausted` when a photo has no remaining candidate,
/// which happens exactly when the input count is odd.
pub fn pair_photos(photos: &[Photo]) -> Result<Vec<Slide>> {
    let mut used = bitvec![0; photos.len()];
    let mut slides = Vec::with_capacity(photos.len() / 2);

    for (index, first) in photos.iter().enumerate() {
        if is_used(&used, index) {
            continue;
        }

        let mut chosen: Option<(usize, &Photo)> = None;
        let mut fewest_shared = usize::MAX;
        let mut scanned = 0;
        for (candidate_index, candidate) in photos.iter().enumerate().skip(index + 1) {
            if is_used(&used, candidate_index) {
                continue;
            }
            if scanned >= PAIR_SCAN_LIMIT {
                break;
            }
            scanned += 1;

            let shared = first.tags().common_count(candidate.tags());
            if shared < fewest_shared {
                fewest_shared = shared;
                chosen = Some((candidate_index, candidate));
            }
        }

        let Some((partner_index, partner)) = chosen else {
            return Err(SlideshowError::PairingExhausted {
                unpaired: used.count_zeros(),
            });
        };

        mark_used(&mut used, index);
        mark_used(&mut used, partner_index);
        slides.push(Slide::from_vertical_pair(first, partner));
    }

    Ok(slides)
}

fn is_used(mask: &BitSlice, index: usize) -> bool {
    mask.get(index).as_deref() == Some(&true)
}

fn mark_used(mask: &mut BitSlice, index: usize) {
    if let Some(mut slot) = mask.get_mut(index) {
        *slot = true;
    }
}
