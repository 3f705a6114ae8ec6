use thiserror::Error;

/// Core error type shared across Autostock crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The static reference tables violate an invariant.
    #[error("invalid reference data: {0}")]
    InvalidReference(String),
}

/// Convenience alias for results returned by Autostock crates.
pub type Result<T> = std::result::Result<T, Error>;
