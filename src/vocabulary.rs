//! Word bag supplying mutation source material.
//!
//! [`Vocabulary`] collects the distinct words of indexed documents in
//! first-seen order. The engine consumes the collected words as a
//! shared, read-only pool; the vocabulary itself grows only while
//! documents are being loaded.

use std::collections::HashSet;

/// Deduplicating word bag, insertion ordered.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words collected.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when no words have been collected.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Extracts the words of `text` and adds the unseen ones.
    ///
    /// Words are lowercased runs of alphanumeric characters; anything
    /// else separates them. Returns how many new words were added.
    pub fn add_words_from(&mut self, text: &str) -> usize {
        let before = self.words.len();
        for token in text.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            let word = token.to_lowercase();
            if self.seen.insert(word.clone()) {
                self.words.push(word);
            }
        }
        self.words.len() - before
    }

    /// The collected words in first-seen order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consumes the vocabulary, yielding the word list for sharing with
    /// the engine.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}
