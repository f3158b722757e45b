pub mod builtin_faq;
pub mod config;
pub mod faq_loader;
pub mod search;
pub mod vectorizer;
