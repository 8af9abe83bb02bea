use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitsieveError {
    /// Invalid session or hash-layout configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed digest input.
    #[error("digest error: {0}")]
    Digest(String),

    /// Bitmap table allocation failure. Fatal for the session.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Snapshot encode/decode failure.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
