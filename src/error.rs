//! Crate-wide error types.

use thiserror::Error;

/// Errors surfaced by the evolutionary engine.
///
/// The engine never retries or swallows these; they propagate to the
/// generational driver, which decides whether to abort the run or skip
/// a generation.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// A recombination mode name could not be parsed.
    ///
    /// Proceeding with an undefined strategy would corrupt the
    /// generational step, so this aborts it instead.
    #[error("unknown recombination mode: {0}")]
    UnknownRecombinationMode(String),

    /// `random_purge` was asked to remove more members than exist.
    ///
    /// Clamping would mask a caller bug about the expected population
    /// size, so the request fails as-is.
    #[error("cannot purge {requested} members from a population of {size}")]
    PurgeExceedsPopulation { requested: usize, size: usize },

    /// The engine configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EvolveError>;
