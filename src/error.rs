//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its helpers.
///
/// Missing or expired keys are not errors; lookups report them as `None`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a capacity that cannot hold a single entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// The operating system's secure random source failed
    #[error("Secure random source failed: {0}")]
    RandomSource(#[from] rand::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
