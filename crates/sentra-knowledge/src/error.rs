use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactStoreError {
    #[error("fact store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed fact entry: {0}")]
    MalformedEntry(String),
}
