//! Error types for cache construction.
//!
//! Lookups never fail: a missing key is reported as `None`. The only
//! fallible operation is building a cache from an invalid configuration.

use core::fmt;

/// Result type alias for cache construction.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Errors returned by cache constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was zero. A cache must hold at least one entry.
    InvalidCapacity {
        /// The rejected capacity value.
        capacity: usize,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity { capacity } => {
                write!(f, "invalid cache capacity: {} (must be > 0)", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}
