//! Capability contract for the text-index collaborator.
//!
//! The engine's driver needs three capabilities from an index: search
//! with a query body, explain the relevance of one document for a query,
//! and fetch a document by id. This module defines that contract and
//! its data types only; index storage, sharding, and query-language
//! parsing live behind the boundary and are not implemented here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single ranked match from a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Document identifier within the index.
    pub id: String,
    /// Relevance score, higher is better.
    pub score: f64,
}

/// Ranked result set returned by [`SearchIndex::search`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matches in descending score order.
    pub hits: Vec<Hit>,
}

impl SearchResults {
    /// Score of the top-ranked hit, `None` when nothing matched.
    pub fn top_score(&self) -> Option<f64> {
        self.hits.first().map(|hit| hit.score)
    }
}

/// Relevance explanation for one document and one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// The document's relevance score for the query.
    pub score: f64,
    /// Backend-specific breakdown of how the score was computed.
    pub description: String,
}

/// A stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier within the index.
    pub id: String,
    /// Full text of the document.
    pub text: String,
}

/// Errors from the index collaborator.
#[derive(Debug, Error)]
pub enum IndexError {
    /// No document with the given id exists in the index.
    #[error("document {0} not found in index")]
    NotFound(String),

    /// The backend rejected or failed the request.
    #[error("index backend error: {0}")]
    Backend(String),
}

/// The index capabilities the evolutionary driver consumes.
///
/// The fitness-evaluation step scores each query by searching with its
/// body (aggregate ranking) or by explaining it against a specific
/// target document (per-document fitness); `get` fetches document
/// content when evaluation needs it.
pub trait SearchIndex {
    /// Runs `body` against the index and returns the ranked matches.
    fn search(&self, body: &Value) -> Result<SearchResults, IndexError>;

    /// Explains the relevance of document `doc_id` for `body`.
    fn explain(&self, body: &Value, doc_id: &str) -> Result<Explanation, IndexError>;

    /// Fetches the document with id `doc_id`.
    fn get(&self, doc_id: &str) -> Result<Document, IndexError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_score() {
        let empty = SearchResults::default();
        assert_eq!(empty.top_score(), None);

        let results = SearchResults {
            hits: vec![
                Hit {
                    id: "a".into(),
                    score: 2.5,
                },
                Hit {
                    id: "b".into(),
                    score: 1.0,
                },
            ],
        };
        assert_eq!(results.top_score(), Some(2.5));
    }

    #[test]
    fn test_error_display() {
        let err = IndexError::NotFound("doc-9".into());
        assert_eq!(err.to_string(), "document doc-9 not found in index");
    }
}
