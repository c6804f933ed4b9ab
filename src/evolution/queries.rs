//! The evolutionary engine over a generation of queries.
//!
//! [`Queries`] owns the population and drives the generational
//! operations: fitness aggregation, selection, recombination, mutation,
//! duplicate elimination, and random culling. Fitness evaluation stays
//! outside: the driver scores each query against the index, writes the
//! scores back through [`queries_mut`](Queries::queries_mut), and then
//! sequences the operations.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

use super::config::EngineConfig;
use super::population::Population;
use super::query::Query;
use super::recombination::RecombinationMode;
use super::sort_cache::SortCache;
use crate::error::{EvolveError, Result};

/// Manages a population of queries under evolution.
///
/// The engine exclusively owns its individuals. The word pool is a
/// shared, read-only reference supplied by the vocabulary collaborator;
/// the engine draws mutation candidates from it and never mutates it.
///
/// Every operation that changes the population bumps an internal change
/// marker, so the sorted view served by
/// [`sorted_queries`](Queries::sorted_queries) can never go stale.
pub struct Queries {
    population: Population<Query>,
    words: Arc<Vec<String>>,
    config: EngineConfig,
    rng: StdRng,
    version: u64,
    sorted: SortCache<Query>,
}

impl Queries {
    /// Creates an engine with the default configuration.
    ///
    /// `words` is the shared mutation word pool; `queries` seeds the
    /// initial population and may be empty.
    pub fn new(words: Arc<Vec<String>>, queries: Vec<Query>) -> Self {
        Self::with_config(words, queries, EngineConfig::default())
            .expect("default engine configuration is valid")
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// Returns [`EvolveError::InvalidConfig`] when the configuration
    /// fails validation.
    pub fn with_config(
        words: Arc<Vec<String>>,
        queries: Vec<Query>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            population: Population::from(queries),
            words,
            config,
            rng,
            version: 0,
            sorted: SortCache::new(true),
        })
    }

    /// Number of queries in the current generation.
    pub fn size(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` when the population is empty.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// The queries in container order.
    pub fn queries(&self) -> &[Query] {
        self.population.as_slice()
    }

    /// Mutable access to the queries, used by the driver to write
    /// evaluated fitness back.
    ///
    /// Handing out mutable access marks the population changed, so the
    /// next sorted view recomputes.
    pub fn queries_mut(&mut self) -> &mut [Query] {
        self.touch();
        self.population.as_mut_slice()
    }

    /// The shared word pool.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Appends one query to the population.
    pub fn push(&mut self, query: Query) {
        self.population.push(query);
        self.touch();
    }

    /// All queries, descending by fitness.
    ///
    /// Served from a cached view that recomputes only when the
    /// population has changed since the last call.
    pub fn sorted_queries(&mut self) -> &[Query] {
        self.sorted
            .view(self.version, self.population.as_slice(), |q| q.fitness())
    }

    /// Mean fitness of the current population, `0.0` when empty.
    pub fn average_score(&self) -> f64 {
        self.population.mean_fitness()
    }

    /// Produces offspring according to `mode` and appends them to the
    /// population.
    ///
    /// Under [`RecombinationMode::Clone`] every individual is
    /// deep-copied and the copy appended, doubling the population.
    /// Offspring never alias their parents' term storage.
    ///
    /// The fallible signature is the strategy-dispatch contract: a
    /// strategy that cannot run must abort the generational step with
    /// an error rather than being skipped.
    pub fn recombine(&mut self, mode: RecombinationMode) -> Result<()> {
        match mode {
            RecombinationMode::Clone => {
                let offspring: Vec<Query> = self.population.iter().cloned().collect();
                debug!("recombine: appending {} cloned offspring", offspring.len());
                self.population.extend(offspring);
            }
        }
        self.touch();
        Ok(())
    }

    /// Applies one mutation to every query, then prunes the queries
    /// that ended up with zero terms.
    ///
    /// This is the single place where non-viable offspring are removed;
    /// survivors keep their pre-mutation relative order.
    pub fn mutate(&mut self) {
        let words = self.words.as_slice();
        for query in self.population.iter_mut() {
            query.mutate_weighted(words, &self.config.mutation, &mut self.rng);
        }
        let before = self.population.len();
        self.population.retain(|query| query.size() > 0);
        let culled = before - self.population.len();
        if culled > 0 {
            debug!("mutate: culled {culled} empty queries");
        }
        self.touch();
    }

    /// Removes every query whose fitness equals the population minimum.
    ///
    /// All tied-for-lowest members go, not just one. When every query
    /// shares the same fitness the population empties entirely.
    /// Queries still at the unset-fitness sentinel rank lowest and are
    /// culled first. A no-op on an empty population.
    pub fn select(&mut self) {
        let Some(min) = self.population.min_fitness() else {
            return;
        };
        let before = self.population.len();
        self.population.retain(|query| query.fitness() > min);
        debug!(
            "select: culled {} members at minimum fitness {min}",
            before - self.population.len()
        );
        self.touch();
    }

    /// Removes `k` uniformly random queries, without replacement and
    /// regardless of fitness.
    ///
    /// Asking for more removals than the population holds is a caller
    /// bug and fails with [`EvolveError::PurgeExceedsPopulation`];
    /// the count is never silently clamped.
    pub fn random_purge(&mut self, k: usize) -> Result<()> {
        let size = self.population.len();
        if k > size {
            return Err(EvolveError::PurgeExceedsPopulation { requested: k, size });
        }
        if k == 0 {
            return Ok(());
        }
        debug!("random_purge: removing {k} random members from population of {size}");
        let doomed: HashSet<usize> = sample(&mut self.rng, size, k).into_iter().collect();
        let mut position = 0;
        self.population.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        self.touch();
        Ok(())
    }

    /// Keeps the first occurrence of each distinct query, identified by
    /// its canonical representation.
    ///
    /// Fitness is not part of identity: a structurally identical query
    /// seen later is dropped along with its fitness, even when that
    /// fitness is higher.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        self.population.retain(|query| seen.insert(query.canonical()));
        self.touch();
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
