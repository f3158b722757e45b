pub mod chat_session;
pub mod faq_service;
pub mod normalize;
