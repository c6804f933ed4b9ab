//! Evolutionary query-population engine.
//!
//! A generation of [`Query`] individuals evolves under fitness pressure:
//! the driver evaluates each query against the index, then sequences the
//! engine's operations (select, recombine, mutate, and optionally
//! deduplicate or purge) until the population converges on queries that
//! retrieve the target well.
//!
//! # Key Types
//!
//! - [`Query`]: a candidate query, its terms, fitness, and mutation
//! - [`Population`]: generic ordered container of individuals
//! - [`Queries`]: the engine managing a generation of queries
//! - [`RecombinationMode`]: offspring-production strategy selector
//! - [`EngineConfig`]: seed and mutation-operator weights
//! - [`SortCache`]: version-keyed cached sorted view
//!
//! # Submodules
//!
//! - [`operators`]: term-level mutation operators and weighted choice
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod queries;
mod query;
mod recombination;
mod sort_cache;
mod types;

pub use config::EngineConfig;
pub use operators::{MutationOp, MutationWeights};
pub use population::Population;
pub use queries::Queries;
pub use query::Query;
pub use recombination::RecombinationMode;
pub use sort_cache::SortCache;
pub use types::{Fitness, Individual};
