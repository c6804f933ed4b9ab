//! Core trait definitions for the evolutionary engine.
//!
//! [`Individual`] is the contract between the generic population
//! machinery and domain-specific candidate types; [`Fitness`] abstracts
//! the scalar score an individual carries.

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization): a query that
/// retrieves its target documents more strongly scores higher.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used as the sentinel for individuals that have not been
    /// evaluated yet: they rank below every evaluated individual.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for aggregation and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution carried by a [`Population`](super::Population).
///
/// Individuals store their own fitness value. The engine never computes
/// fitness itself; an external evaluation step scores each individual
/// against the index and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_is_below_any_score() {
        assert!(f64::worst() < -1e300);
        assert!(f32::worst() < -1e30);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(3.5f64.to_f64(), 3.5);
        assert_eq!(2.0f32.to_f64(), 2.0);
    }
}
