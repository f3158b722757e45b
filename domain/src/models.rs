use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("knowledge base must contain at least one entry")]
    Empty,
    #[error("duplicate question in knowledge base: {0:?}")]
    DuplicateQuestion(String),
}

/// Ordered, immutable set of FAQ entries. Order matters: it decides ties
/// between equally similar questions.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, KnowledgeBaseError> {
        if entries.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.question.as_str()) {
                return Err(KnowledgeBaseError::DuplicateQuestion(
                    entry.question.clone(),
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }
}
