//! A single candidate query.
//!
//! [`Query`] is the individual under evolution: an ordered sequence of
//! terms with an externally assigned fitness and a JSON body consumable
//! by the index's search and explain contracts.

use std::fmt;

use rand::Rng;
use serde_json::{json, Value};

use super::operators::{self, MutationOp, MutationWeights};
use super::types::{Fitness, Individual};

/// A candidate search query.
///
/// The term sequence is the query's structural content. Fitness starts
/// at the unset sentinel ([`Fitness::worst`]) and is assigned by the
/// driver after scoring the query against the index; the query never
/// computes its own fitness.
///
/// A query with zero terms is non-viable. Mutation may produce one; the
/// engine prunes it during the mutation pass.
#[derive(Debug, Clone)]
pub struct Query {
    terms: Vec<String>,
    fitness: f64,
}

impl Query {
    /// Creates a query from an ordered term sequence, fitness unset.
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            fitness: f64::worst(),
        }
    }

    /// Creates a query by splitting `text` on whitespace.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_string).collect())
    }

    /// Number of terms. A size of zero marks the query non-viable.
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` when the query holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms in order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Current fitness, [`Fitness::worst`] until evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Assigns the fitness computed by the external evaluation step.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Canonical textual representation: the terms joined by a single
    /// space.
    ///
    /// Two queries with identical term sequences produce identical
    /// canonical forms regardless of fitness; this is the deduplication
    /// key.
    pub fn canonical(&self) -> String {
        self.terms.join(" ")
    }

    /// JSON body consumable by the index's search and explain contracts.
    ///
    /// Matches against the index's `full_text` field.
    pub fn body(&self) -> Value {
        json!({
            "query": {
                "match": {
                    "full_text": self.canonical(),
                }
            }
        })
    }

    /// Applies one mutation with uniform operator weights.
    ///
    /// See [`mutate_weighted`](Self::mutate_weighted).
    pub fn mutate<R: Rng>(&mut self, pool: &[String], rng: &mut R) {
        self.mutate_weighted(pool, &MutationWeights::default(), rng);
    }

    /// Applies one weighted-random mutation: add, remove, or replace a
    /// term, drawing candidate words from `pool`.
    ///
    /// The result is always a structurally valid query but may be
    /// empty; the caller decides whether an empty query survives. When
    /// no operator is applicable (empty pool and no terms) the query is
    /// left unchanged.
    pub fn mutate_weighted<R: Rng>(
        &mut self,
        pool: &[String],
        weights: &MutationWeights,
        rng: &mut R,
    ) {
        let op = operators::choose_op(weights, !self.terms.is_empty(), !pool.is_empty(), rng);
        match op {
            Some(MutationOp::AddTerm) => operators::add_term(&mut self.terms, pool, rng),
            Some(MutationOp::RemoveTerm) => operators::remove_term(&mut self.terms, rng),
            Some(MutationOp::ReplaceTerm) => operators::replace_term(&mut self.terms, pool, rng),
            None => {}
        }
    }
}

impl Individual for Query {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
