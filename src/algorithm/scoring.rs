//! Transition scoring between neighbouring slides

use crate::io::configuration::NO_RELATION_COST;
use crate::model::slide::Slide;
use crate::model::tags::TagSet;

/// Interest score for showing two tag sets on consecutive slides
///
/// The score is the minimum of the shared tag count and the exclusive tag
/// counts on either side. Balanced transitions win: near-duplicate and
/// near-disjoint neighbours both collapse to a small minimum.
pub fn transition_score(first: &TagSet, second: &TagSet) -> usize {
    let common = first.common_count(second);
    let first_only = first.len() - common;
    let second_only = second.len() - common;
    common.min(first_only).min(second_only)
}

/// Traversal cost derived from a transition score
///
/// Cost falls monotonically as the score rises. A zero score maps to the
/// fixed no-relation penalty, which exceeds every finite cost so unrelated
/// slides stay traversable but maximally discouraged.
pub fn edge_cost(first: &Slide, second: &Slide) -> f64 {
    let score = transition_score(first.tags(), second.tags());
    if score == 0 {
        NO_RELATION_COST
    } else {
        1.0 / score as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{edge_cost, transition_score};
    use crate::io::configuration::NO_RELATION_COST;
    use crate::model::photo::{Orientation, Photo};
    use crate::model::slide::Slide;
    use crate::model::tags::TagSet;

    fn tags(values: &[&str]) -> TagSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_score_is_symmetric() {
        let first = tags(&["a", "b", "c"]);
        let second = tags(&["b", "c", "d"]);

        assert_eq!(
            transition_score(&first, &second),
            transition_score(&second, &first)
        );
    }

    // {a,b,c} vs {b,c,d}: two shared, one exclusive per side
    #[test]
    fn test_score_balanced_overlap() {
        let first = tags(&["a", "b", "c"]);
        let second = tags(&["b", "c", "d"]);

        assert_eq!(transition_score(&first, &second), 1);
    }

    #[test]
    fn test_score_bounded_by_smaller_set() {
        let first = tags(&["a", "b"]);
        let second = tags(&["a", "b", "c", "d", "e"]);

        assert!(transition_score(&first, &second) <= first.len().min(second.len()));
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let first = tags(&["a", "b"]);
        let second = tags(&["c", "d"]);

        assert_eq!(transition_score(&first, &second), 0);
    }

    #[test]
    fn test_zero_score_maps_to_penalty_cost() {
        let first = Slide::from_horizontal(&Photo::new(0, Orientation::Horizontal, tags(&["a"])));
        let second = Slide::from_horizontal(&Photo::new(1, Orientation::Horizontal, tags(&["b"])));

        assert!((edge_cost(&first, &second) - NO_RELATION_COST).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_is_inverse_score() {
        let first = Slide::from_horizontal(&Photo::new(
            0,
            Orientation::Horizontal,
            tags(&["a", "b", "c", "d"]),
        ));
        let second = Slide::from_horizontal(&Photo::new(
            1,
            Orientation::Horizontal,
            tags(&["c", "d", "e", "f"]),
        ));

        assert!((edge_cost(&first, &second) - 0.5).abs() < f64::EPSILON);
    }
}
