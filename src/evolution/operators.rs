//! Term-level mutation operators.
//!
//! Operators perturb a query's term vector in place, drawing candidate
//! words from a shared pool:
//!
//! - [`add_term`]: insert a random pool word at a random position
//! - [`remove_term`]: delete the term at a random position
//! - [`replace_term`]: overwrite a random position with a random pool word
//!
//! [`choose_op`] picks which operator to apply by cumulative-weight
//! roulette over the operators that are applicable to the current state
//! (adding needs a non-empty pool, removing needs at least one term,
//! replacing needs both).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single mutation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    /// Insert a pool word at a random position.
    AddTerm,
    /// Remove the term at a random position.
    RemoveTerm,
    /// Overwrite a random position with a pool word.
    ReplaceTerm,
}

/// Relative weights for choosing between mutation operators.
///
/// Weights are relative, not probabilities: `{2.0, 1.0, 1.0}` applies
/// `AddTerm` half of the time. A weight of `0.0` disables an operator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationWeights {
    pub add: f64,
    pub remove: f64,
    pub replace: f64,
}

impl Default for MutationWeights {
    fn default() -> Self {
        Self {
            add: 1.0,
            remove: 1.0,
            replace: 1.0,
        }
    }
}

impl MutationWeights {
    /// Validates the weights.
    ///
    /// Returns `Err` with a description if any weight is negative or
    /// non-finite, or if all weights are zero.
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in [
            ("add", self.add),
            ("remove", self.remove),
            ("replace", self.replace),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!(
                    "{name} weight must be finite and non-negative, got {weight}"
                ));
            }
        }
        if self.add + self.remove + self.replace <= 0.0 {
            return Err("mutation weights must not all be zero".into());
        }
        Ok(())
    }
}

/// Chooses a mutation operator by weighted roulette over the operators
/// applicable to the current query state.
///
/// Returns `None` when no operator is applicable (no terms to remove
/// and no pool words to draw from) or every applicable operator has
/// zero weight. The caller treats `None` as a no-op mutation.
pub fn choose_op<R: Rng>(
    weights: &MutationWeights,
    has_terms: bool,
    has_pool: bool,
    rng: &mut R,
) -> Option<MutationOp> {
    let candidates = [
        (MutationOp::AddTerm, weights.add, has_pool),
        (MutationOp::RemoveTerm, weights.remove, has_terms),
        (MutationOp::ReplaceTerm, weights.replace, has_terms && has_pool),
    ];

    let total: f64 = candidates
        .iter()
        .filter(|(_, _, applicable)| *applicable)
        .map(|(_, weight, _)| weight)
        .sum();
    if total <= 0.0 {
        return None;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (op, weight, applicable) in candidates {
        if !applicable {
            continue;
        }
        cumulative += weight;
        if cumulative > threshold {
            return Some(op);
        }
    }

    // floating-point fallback: last applicable operator with weight
    candidates
        .iter()
        .rev()
        .find(|(_, weight, applicable)| *applicable && *weight > 0.0)
        .map(|(op, _, _)| *op)
}

/// Inserts a random word from `pool` at a random position in `terms`.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn add_term<R: Rng>(terms: &mut Vec<String>, pool: &[String], rng: &mut R) {
    assert!(!pool.is_empty(), "word pool must not be empty");
    let word = pool[rng.random_range(0..pool.len())].clone();
    let position = rng.random_range(0..=terms.len());
    terms.insert(position, word);
}

/// Removes the term at a random position in `terms`.
///
/// # Panics
/// Panics if `terms` is empty.
pub fn remove_term<R: Rng>(terms: &mut Vec<String>, rng: &mut R) {
    assert!(!terms.is_empty(), "terms must not be empty");
    let position = rng.random_range(0..terms.len());
    terms.remove(position);
}

/// Overwrites the term at a random position with a random pool word.
///
/// # Panics
/// Panics if `terms` or `pool` is empty.
pub fn replace_term<R: Rng>(terms: &mut Vec<String>, pool: &[String], rng: &mut R) {
    assert!(!terms.is_empty(), "terms must not be empty");
    assert!(!pool.is_empty(), "word pool must not be empty");
    let position = rng.random_range(0..terms.len());
    terms[position] = pool[rng.random_range(0..pool.len())].clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        vec!["alpha".into(), "beta".into(), "gamma".into()]
    }

    #[test]
    fn test_add_term_grows_by_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut terms = vec!["x".to_string()];
        add_term(&mut terms, &pool(), &mut rng);
        assert_eq!(terms.len(), 2);
        assert!(terms.iter().any(|t| pool().contains(t)));
    }

    #[test]
    fn test_add_term_into_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut terms = Vec::new();
        add_term(&mut terms, &pool(), &mut rng);
        assert_eq!(terms.len(), 1);
        assert!(pool().contains(&terms[0]));
    }

    #[test]
    fn test_remove_term_shrinks_by_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut terms = vec!["x".to_string(), "y".to_string()];
        remove_term(&mut terms, &mut rng);
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_replace_term_keeps_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut terms = vec!["x".to_string(), "y".to_string()];
        replace_term(&mut terms, &pool(), &mut rng);
        assert_eq!(terms.len(), 2);
        assert!(terms.iter().any(|t| pool().contains(t)));
    }

    #[test]
    fn test_choose_op_no_candidates() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights::default();
        assert_eq!(choose_op(&weights, false, false, &mut rng), None);
    }

    #[test]
    fn test_choose_op_empty_terms_only_adds() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights::default();
        for _ in 0..100 {
            assert_eq!(
                choose_op(&weights, false, true, &mut rng),
                Some(MutationOp::AddTerm)
            );
        }
    }

    #[test]
    fn test_choose_op_empty_pool_only_removes() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights::default();
        for _ in 0..100 {
            assert_eq!(
                choose_op(&weights, true, false, &mut rng),
                Some(MutationOp::RemoveTerm)
            );
        }
    }

    #[test]
    fn test_choose_op_zero_weight_disables() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights {
            add: 0.0,
            remove: 1.0,
            replace: 0.0,
        };
        for _ in 0..100 {
            assert_eq!(
                choose_op(&weights, true, true, &mut rng),
                Some(MutationOp::RemoveTerm)
            );
        }
    }

    #[test]
    fn test_choose_op_all_zero_is_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights {
            add: 0.0,
            remove: 0.0,
            replace: 0.0,
        };
        assert_eq!(choose_op(&weights, true, true, &mut rng), None);
    }

    #[test]
    fn test_choose_op_respects_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = MutationWeights {
            add: 10.0,
            remove: 1.0,
            replace: 1.0,
        };
        let mut adds = 0;
        let n = 10000;
        for _ in 0..n {
            if choose_op(&weights, true, true, &mut rng) == Some(MutationOp::AddTerm) {
                adds += 1;
            }
        }
        // expectation is 10/12 of draws
        assert!(adds > 7000, "expected add to dominate, got {adds}/{n}");
    }

    #[test]
    fn test_validate_rejects_negative() {
        let weights = MutationWeights {
            add: -1.0,
            ..MutationWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_all_zero() {
        let weights = MutationWeights {
            add: 0.0,
            remove: 0.0,
            replace: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(MutationWeights::default().validate().is_ok());
    }
}
