//! Dense ranking over active lines, one invocation per metric.
//!
//! Dense ("1223") semantics: tied values share a rank and the next
//! distinct value gets previous + 1, so ten lines tied at the top all
//! hold rank 1 and the runner-up holds rank 2.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Sort direction for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower value is better (absenteeism, rejection).
    Asc,
    /// Higher value is better (amount, efficiency hit rate).
    Desc,
}

/// Dense-rank the given (label, value) entries. Non-finite values do
/// not occupy a rank slot and are absent from the returned map; callers
/// treat a missing label as rank 0 (unranked).
pub fn dense_rank(entries: &[(&str, f64)], direction: Direction) -> HashMap<String, u32> {
    let mut sorted: Vec<(&str, f64)> = entries
        .iter()
        .filter(|(_, v)| v.is_finite())
        .copied()
        .collect();

    sorted.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });

    let mut ranks = HashMap::with_capacity(sorted.len());
    let mut rank = 0u32;
    let mut prev: Option<f64> = None;
    for (label, value) in sorted {
        if prev != Some(value) {
            rank += 1;
            prev = Some(value);
        }
        ranks.insert(label.to_string(), rank);
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_rank_ties_share_and_next_increments_by_one() {
        let entries = [("a", 50.0), ("b", 50.0), ("c", 30.0)];
        let ranks = dense_rank(&entries, Direction::Desc);
        assert_eq!(ranks["a"], 1);
        assert_eq!(ranks["b"], 1);
        assert_eq!(ranks["c"], 2); // dense: not 3
    }

    #[test]
    fn test_ascending_direction() {
        let entries = [("low", 2.0), ("mid", 5.0), ("high", 9.0)];
        let ranks = dense_rank(&entries, Direction::Asc);
        assert_eq!(ranks["low"], 1);
        assert_eq!(ranks["mid"], 2);
        assert_eq!(ranks["high"], 3);
    }

    #[test]
    fn test_non_finite_values_excluded() {
        let entries = [("ok", 10.0), ("nan", f64::NAN), ("inf", f64::INFINITY)];
        let ranks = dense_rank(&entries, Direction::Desc);
        assert_eq!(ranks.len(), 1);
        assert_eq!(ranks["ok"], 1);
        assert!(!ranks.contains_key("nan"));
    }

    #[test]
    fn test_empty_input() {
        let ranks = dense_rank(&[], Direction::Asc);
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_all_tied() {
        let entries = [("a", 7.0), ("b", 7.0), ("c", 7.0)];
        let ranks = dense_rank(&entries, Direction::Asc);
        assert!(ranks.values().all(|&r| r == 1));
    }
}
