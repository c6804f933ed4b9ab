//! Evolutionary optimization of search queries.
//!
//! A population of candidate queries is scored against a text index,
//! low-fitness members are culled, survivors are recombined and mutated,
//! and the cycle repeats to discover queries that better match a target
//! retrieval objective.
//!
//! - **[`evolution`]**: the query-population engine. Fitness-driven
//!   selection, clone recombination, term-level mutation, duplicate
//!   elimination, and random culling over a generation of [`evolution::Query`]
//!   individuals.
//! - **[`index`]**: the capability contract the engine's driver needs from
//!   a text index (search, explain, get). Index storage, sharding, and
//!   query-language parsing live behind this boundary and are not part of
//!   this crate.
//! - **[`vocabulary`]**: a word bag collected incrementally from indexed
//!   documents, consumed by the engine as read-only mutation source
//!   material.
//!
//! # Architecture
//!
//! The engine is single-threaded and synchronous. Fitness evaluation is
//! the driver's job: score each query through a [`index::SearchIndex`],
//! write the scores back, then run the generational operations
//! (`select`, `recombine`, `mutate`, and optionally `remove_duplicates`
//! or `random_purge`). The engine only guarantees each operation's own
//! invariants; sequencing is up to the driver.

pub mod error;
pub mod evolution;
pub mod index;
pub mod vocabulary;
