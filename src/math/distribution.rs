//! Cumulative selection tables for roulette-wheel draws

/// Cumulative percentages of a weight table
///
/// Each entry is the running share of the total weight scaled to 0–100,
/// so the final entry is 100 up to rounding. An all-zero or empty table
/// yields all-zero percentages.
pub fn cumulative_percentages(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }

    let mut running = 0.0;
    weights
        .iter()
        .map(|weight| {
            running += weight;
            100.0 * running / total
        })
        .collect()
}

/// First entry whose cumulative percentage exceeds the picked value
///
/// Falls back to the last entry when rounding keeps every percentage at or
/// below the pick.
pub fn first_exceeding(cumulative: &[f64], pick: f64) -> usize {
    for (index, &value) in cumulative.iter().enumerate() {
        if pick < value {
            return index;
        }
    }
    cumulative.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::{cumulative_percentages, first_exceeding};

    #[test]
    fn test_cumulative_percentages_reach_one_hundred() {
        let table = cumulative_percentages(&[1.0, 3.0, 4.0]);

        assert_eq!(table.len(), 3);
        assert!((table.first().copied().unwrap_or(0.0) - 12.5).abs() < 1e-12);
        assert!((table.get(1).copied().unwrap_or(0.0) - 50.0).abs() < 1e-12);
        assert!((table.last().copied().unwrap_or(0.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_yield_zero_table() {
        assert_eq!(cumulative_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(cumulative_percentages(&[]).is_empty());
    }

    #[test]
    fn test_first_exceeding_picks_by_share() {
        let table = cumulative_percentages(&[1.0, 3.0, 4.0]);

        assert_eq!(first_exceeding(&table, 0.0), 0);
        assert_eq!(first_exceeding(&table, 12.5), 1);
        assert_eq!(first_exceeding(&table, 49.9), 1);
        assert_eq!(first_exceeding(&table, 99.9), 2);
    }

    #[test]
    fn test_first_exceeding_falls_back_to_last_entry() {
        let table = vec![25.0, 100.0];
        assert_eq!(first_exceeding(&table, 100.0), 1);
    }
}
