//! Secure memory handling
//!
//! This module provides type-safe wrappers for sensitive data that ensure
//! proper cleanup and zeroization when the data is no longer needed.

mod secret;

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
pub use secret::EphemeralSecret;
