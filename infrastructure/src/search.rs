use crate::vectorizer::TermVector;

pub struct SearchEngine;

impl SearchEngine {
    /// Cosine similarity. A zero vector on either side scores 0 instead of NaN.
    pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot_product / (norm_a * norm_b)
    }

    /// Similarity of `query` against every document, in document order.
    pub fn similarities(query: &TermVector, documents: &[TermVector]) -> Vec<f64> {
        documents
            .iter()
            .map(|doc| Self::cosine_similarity(query.weights(), doc.weights()))
            .collect()
    }

    /// Index and value of the highest score. Ties go to the earliest index.
    pub fn argmax(scores: &[f64]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, &score) in scores.iter().enumerate() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }
}
