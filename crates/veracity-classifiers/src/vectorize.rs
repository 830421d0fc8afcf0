//! TF-IDF vocabulary learning and text-to-vector transformation.
//!
//! `TfidfVectorizer` is the fit-time builder; fitting yields a
//! [`FittedVectorizer`] that owns the vocabulary and IDF weights and is
//! read-only afterwards. Transforming before fitting is unrepresentable:
//! only `fit` constructs the fitted state.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};

use crate::math::SparseVector;
use crate::preprocessing::tokenize;

/// Builder for learning a TF-IDF vocabulary from training text.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Tokens must appear in at least this many training documents.
    min_document_frequency: usize,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        TfidfVectorizer { min_document_frequency: 1 }
    }

    /// Drop tokens seen in fewer than `min_df` training documents.
    pub fn with_min_document_frequency(mut self, min_df: usize) -> Self {
        self.min_document_frequency = min_df.max(1);
        self
    }

    /// Learn the vocabulary and IDF weights from normalized training texts.
    ///
    /// Called exactly once per pipeline run, on the training subset only,
    /// so no information leaks from the held-out split. Fails on an empty
    /// training set or when no token survives stop-word and frequency
    /// filtering.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<FittedVectorizer> {
        if documents.is_empty() {
            bail!("cannot fit a vectorizer on an empty training set");
        }

        let n_docs = documents.len();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for document in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokenize(document.as_ref()) {
                seen.insert(token);
            }
            for token in seen {
                *document_frequency.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= self.min_document_frequency)
            .collect();
        if terms.is_empty() {
            bail!("vocabulary is empty after tokenization and stop-word filtering");
        }
        // Alphabetical order fixes feature indices across runs.
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, df)) in terms.into_iter().enumerate() {
            // Smoothed IDF: pretend one extra document contains every term,
            // so terms present in all documents keep a finite weight.
            let weight = ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0;
            vocabulary.insert(term, index);
            idf.push(weight);
        }

        log::debug!("fitted vocabulary of {} term(s) from {} document(s)", idf.len(), n_docs);

        Ok(FittedVectorizer { vocabulary, idf })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Vocabulary and IDF weights learned from one training subset. Read-only
/// after fitting; shared by every downstream transform call.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl FittedVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Feature index of `term`, if it was in the training vocabulary.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Transform normalized text into an L2-normalized TF-IDF vector over
    /// the fitted vocabulary. Tokens outside the vocabulary contribute zero
    /// weight; text with no known tokens yields the zero vector.
    pub fn transform(&self, normalized: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(normalized) {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        let mut vector = SparseVector::from_entries(self.vocabulary_size(), entries);
        vector.normalize();
        vector
    }

    /// Transform a batch of normalized texts, preserving order.
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents.iter().map(|doc| self.transform(doc.as_ref())).collect()
    }
}
