//! Generic ordered container of individuals.
//!
//! [`Population`] is purely structural: it holds individuals in
//! insertion order and exposes baseline lifecycle operations. Selection
//! pressure, recombination, and mutation live in the engine that owns
//! the population, not here.

use super::types::{Fitness, Individual};

/// Ordered collection of individuals of a single type.
///
/// Duplicates are allowed unless explicitly removed by the owner.
/// Insertion order carries no meaning beyond container order.
#[derive(Debug, Clone)]
pub struct Population<T> {
    individuals: Vec<T>,
}

impl<T> Population<T> {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Appends one individual.
    pub fn push(&mut self, individual: T) {
        self.individuals.push(individual);
    }

    /// Appends every individual from `iter`.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.individuals.extend(iter);
    }

    /// Iterates over the individuals in container order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.individuals.iter()
    }

    /// Iterates mutably over the individuals in container order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.individuals.iter_mut()
    }

    /// Keeps only the individuals for which `keep` returns `true`,
    /// preserving the order of the survivors.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.individuals.retain(keep);
    }

    /// The individuals as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.individuals
    }

    /// The individuals as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.individuals
    }
}

impl<T> Default for Population<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Population<T> {
    fn from(individuals: Vec<T>) -> Self {
        Self { individuals }
    }
}

/// Fitness aggregation over a population of evaluated individuals.
impl<T: Individual> Population<T> {
    /// Lowest fitness present, or `None` on an empty population.
    ///
    /// Incomparable values (NaN) are treated as equal, matching the
    /// ordering used everywhere else in the engine.
    pub fn min_fitness(&self) -> Option<T::Fitness> {
        self.individuals
            .iter()
            .map(|ind| ind.fitness())
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Mean fitness over the population.
    ///
    /// Returns `0.0` on an empty population. This is a defined outcome,
    /// not an error: reporting and termination checks read it without
    /// guarding for emptiness.
    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .individuals
            .iter()
            .map(|ind| ind.fitness().to_f64())
            .sum();
        sum / self.individuals.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Population<TestInd> {
        Population::from(
            fitnesses
                .iter()
                .map(|&f| TestInd { fit: f })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_empty_population() {
        let pop: Population<TestInd> = Population::new();
        assert_eq!(pop.len(), 0);
        assert!(pop.is_empty());
        assert!(pop.min_fitness().is_none());
        assert_eq!(pop.mean_fitness(), 0.0);
    }

    #[test]
    fn test_push_and_extend_preserve_order() {
        let mut pop = Population::new();
        pop.push(TestInd { fit: 1.0 });
        pop.extend(vec![TestInd { fit: 2.0 }, TestInd { fit: 3.0 }]);
        let fits: Vec<f64> = pop.iter().map(|i| i.fit).collect();
        assert_eq!(fits, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_retain_is_stable() {
        let mut pop = make_population(&[1.0, 2.0, 3.0, 4.0]);
        pop.retain(|i| i.fit != 2.0);
        let fits: Vec<f64> = pop.iter().map(|i| i.fit).collect();
        assert_eq!(fits, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_min_fitness() {
        let pop = make_population(&[3.0, 1.0, 2.0]);
        assert_eq!(pop.min_fitness(), Some(1.0));
    }

    #[test]
    fn test_mean_fitness() {
        let pop = make_population(&[2.0, 4.0]);
        assert_eq!(pop.mean_fitness(), 3.0);
    }

    #[test]
    fn test_iter_mut_allows_fitness_assignment() {
        let mut pop = make_population(&[0.0, 0.0]);
        for ind in pop.iter_mut() {
            ind.set_fitness(5.0);
        }
        assert_eq!(pop.mean_fitness(), 5.0);
    }
}
