//! Shared fixtures for the cross-crate tests.

use application::faq_service::FaqService;
use domain::{FaqEntry, KnowledgeBase};
use infrastructure::builtin_faq::builtin_knowledge_base;
use std::io::Write;

pub fn builtin_service() -> FaqService {
    FaqService::new(builtin_knowledge_base().expect("built-in FAQ set is valid"))
        .expect("built-in FAQ set has a vocabulary")
}

pub fn service_from(entries: &[(&str, &str)]) -> FaqService {
    let kb = KnowledgeBase::new(entries.iter().map(|(q, a)| FaqEntry::new(*q, *a)).collect())
        .expect("valid knowledge base");
    FaqService::new(kb).expect("fit succeeds")
}

/// Writes `contents` to a temporary `.json` file kept alive by the returned handle.
pub fn faq_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
