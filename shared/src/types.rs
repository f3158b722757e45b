/// Result type used by binaries and the presentation layer.
pub type Result<T> = anyhow::Result<T>;
