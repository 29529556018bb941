//! Error handling for cipher operations

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for cipher operations
///
/// The only failure mode in this crate is key material of zero length:
/// key scheduling and the cyclic transforms both index by `position mod
/// length`, which is undefined for an empty key or keystream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key or keystream argument was empty
    InvalidKey {
        /// Operation that rejected the key material
        context: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context } => {
                write!(f, "Invalid key material in {}: length must be at least 1", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
