//! Answers free-text questions from a fixed FAQ set.
//!
//! The TF-IDF model is fit once from the stored questions when the service
//! is built; every query after that is a read-only lookup.

use crate::normalize::QueryNormalizer;
use domain::messages::FALLBACK_ANSWER;
use domain::KnowledgeBase;
use infrastructure::config::DEFAULT_SIMILARITY_THRESHOLD;
use infrastructure::search::SearchEngine;
use infrastructure::vectorizer::{TermVector, TfidfVectorizer, VectorizerError};
use shared::telemetry::Telemetry;
use tracing::debug;

/// A stored question together with its similarity to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredQuestion {
    pub index: usize,
    pub question: String,
    pub score: f64,
}

pub struct FaqService {
    knowledge_base: KnowledgeBase,
    vectorizer: TfidfVectorizer,
    question_vectors: Vec<TermVector>,
    normalizer: QueryNormalizer,
    threshold: f64,
}

impl FaqService {
    pub fn new(knowledge_base: KnowledgeBase) -> Result<Self, VectorizerError> {
        Self::with_threshold(knowledge_base, DEFAULT_SIMILARITY_THRESHOLD)
    }

    pub fn with_threshold(
        knowledge_base: KnowledgeBase,
        threshold: f64,
    ) -> Result<Self, VectorizerError> {
        let vectorizer = TfidfVectorizer::fit(knowledge_base.questions())?;
        let question_vectors = knowledge_base
            .questions()
            .map(|q| vectorizer.transform(q))
            .collect();
        Ok(Self {
            knowledge_base,
            vectorizer,
            question_vectors,
            normalizer: QueryNormalizer::new()?,
            threshold,
        })
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Best stored answer for `query`, or the fallback message. Never fails.
    pub fn get_response(&self, query: &str) -> String {
        let telemetry = Telemetry::new();
        let answer = match self.best_match(query) {
            Some(best) if best.score > self.threshold => self
                .knowledge_base
                .get(best.index)
                .map(|entry| entry.answer.clone()),
            _ => None,
        };
        debug!(
            matched = answer.is_some(),
            elapsed_us = telemetry.elapsed_micros() as u64,
            "answered query"
        );
        answer.unwrap_or_else(|| FALLBACK_ANSWER.to_string())
    }

    /// Every stored question with its similarity to `query`, in stored order.
    pub fn rank(&self, query: &str) -> Vec<ScoredQuestion> {
        let scores = self.scores(query);
        self.knowledge_base
            .questions()
            .zip(scores)
            .enumerate()
            .map(|(index, (question, score))| ScoredQuestion {
                index,
                question: question.to_string(),
                score,
            })
            .collect()
    }

    /// Highest-scoring stored question; the earliest one wins a tie.
    pub fn best_match(&self, query: &str) -> Option<ScoredQuestion> {
        let scores = self.scores(query);
        let (index, score) = SearchEngine::argmax(&scores)?;
        let question = self.knowledge_base.get(index)?.question.clone();
        debug!(index, score, question = %question, "best match");
        Some(ScoredQuestion {
            index,
            question,
            score,
        })
    }

    fn scores(&self, query: &str) -> Vec<f64> {
        let normalized = self.normalizer.normalize(query);
        let query_vector = self.vectorizer.transform(&normalized);
        SearchEngine::similarities(&query_vector, &self.question_vectors)
    }
}
