use crate::builtin_faq::builtin_knowledge_base;
use domain::{FaqEntry, KnowledgeBase, KnowledgeBaseError};
use shared::utils::is_supported_faq_file;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read FAQ file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse FAQ file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported FAQ file {0:?}; expected a .json file")]
    UnsupportedFormat(PathBuf),
    #[error(transparent)]
    Invalid(#[from] KnowledgeBaseError),
}

/// Built-in set when `path` is `None`, otherwise the entries of the JSON file.
pub fn load_knowledge_base(path: Option<&Path>) -> Result<KnowledgeBase, LoadError> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(builtin_knowledge_base()?),
    }
}

/// Reads a JSON array of `{"question": ..., "answer": ...}` objects.
pub fn load_from_file(path: &Path) -> Result<KnowledgeBase, LoadError> {
    if !is_supported_faq_file(path) {
        return Err(LoadError::UnsupportedFormat(path.to_path_buf()));
    }
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<FaqEntry> =
        serde_json::from_str(&data).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), entries = entries.len(), "loaded FAQ file");
    Ok(KnowledgeBase::new(entries)?)
}
