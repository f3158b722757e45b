//! TF-IDF weighting over a vocabulary fit once from the stored questions.
//!
//! Weighting follows the common smoothed formulation:
//! raw term counts, `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, and an L2
//! normalization of every vector. Tokens are runs of two or more word
//! characters after lower-casing, so single letters never enter the
//! vocabulary.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::debug;

const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Error)]
pub enum VectorizerError {
    #[error("empty vocabulary; the documents contain no tokens")]
    EmptyVocabulary,
    #[error("invalid token pattern: {0}")]
    InvalidTokenPattern(#[from] regex::Error),
}

/// Dense weight vector over the fitted vocabulary. Either unit length or all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    weights: Vec<f64>,
}

impl TermVector {
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[cfg(test)]
    pub(crate) fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    #[cfg(test)]
    pub(crate) fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    token_pattern: Regex,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit<'a, I>(documents: I) -> Result<Self, VectorizerError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let token_pattern = Regex::new(TOKEN_PATTERN)?;

        let mut doc_count = 0usize;
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            doc_count += 1;
            let unique: BTreeSet<String> = tokenize(&token_pattern, doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(VectorizerError::EmptyVocabulary);
        }

        // Sorted term order keeps indices stable across runs.
        let terms: BTreeSet<&String> = doc_freq.keys().collect();
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        let n = doc_count as f64;
        for (index, term) in terms.into_iter().enumerate() {
            let df = doc_freq[term] as f64;
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.clone(), index);
        }

        debug!(
            documents = doc_count,
            vocabulary = vocabulary.len(),
            "fitted tf-idf model"
        );

        Ok(Self {
            token_pattern,
            vocabulary,
            idf,
        })
    }

    /// Weight `text` with the fitted model. Unknown terms are dropped; text
    /// with no known terms yields the zero vector.
    pub fn transform(&self, text: &str) -> TermVector {
        let mut weights = vec![0.0; self.idf.len()];
        for token in tokenize(&self.token_pattern, text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                weights[index] += 1.0;
            }
        }
        for (weight, idf) in weights.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut weights {
                *weight /= norm;
            }
        }
        TermVector { weights }
    }

    #[cfg(test)]
    pub(crate) fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub(crate) fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    #[cfg(test)]
    pub(crate) fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }
}

fn tokenize(pattern: &Regex, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
