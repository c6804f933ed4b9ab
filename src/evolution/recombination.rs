//! Offspring-production strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvolveError;

/// Strategy for producing offspring during recombination.
///
/// Currently a single strategy exists. Adding one is a new variant plus
/// a new arm in the engine's dispatch; the match there is exhaustive,
/// so a variant without a handler fails to compile instead of being
/// silently skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecombinationMode {
    /// Deep-copy every individual and append the copies: the population
    /// doubles and offspring share no mutable state with their parents.
    #[default]
    Clone,
}

impl fmt::Display for RecombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecombinationMode::Clone => f.write_str("clone"),
        }
    }
}

impl FromStr for RecombinationMode {
    type Err = EvolveError;

    /// Parses a mode name, case-insensitively.
    ///
    /// An unrecognized name is a configuration error: running a
    /// generational step with an undefined strategy would corrupt it,
    /// so the caller gets [`EvolveError::UnknownRecombinationMode`] and
    /// decides whether to abort.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clone" => Ok(RecombinationMode::Clone),
            _ => Err(EvolveError::UnknownRecombinationMode(s.to_string())),
        }
    }
}
