pub mod messages;
pub mod models;
pub mod session;

pub use models::{FaqEntry, KnowledgeBase, KnowledgeBaseError};
pub use session::{Message, Speaker, Transcript};
