//! Type-safe key implementation
//!
//! Provides the short-secret key type with guaranteed non-emptiness and
//! appropriate security properties.

use core::fmt;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::security::SecretVec;
use crate::types::ConstantTimeEq as LocalConstantEq;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

/// A secret key for the cipher
///
/// A key is a non-empty byte sequence of any length. Non-emptiness is
/// checked at construction, so every `Key` in existence can seed the
/// scheduling pass without a further length check.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    data: SecretVec,
}

impl Key {
    /// Create a new key from an owned byte vector
    ///
    /// Errors with [`Error::InvalidKey`](crate::Error) if `bytes` is empty.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        validate::non_empty("Key::new", bytes.len())?;
        Ok(Self {
            data: SecretVec::new(bytes),
        })
    }

    /// Create a key from a byte slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::non_empty("Key::from_slice", bytes.len())?;
        Ok(Self {
            data: SecretVec::from_slice(bytes),
        })
    }

    /// Generate a random key of the given length using the provided RNG
    ///
    /// A zero `length` is rejected, since the resulting key could never
    /// be scheduled.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<Self> {
        validate::non_empty("Key::random", length)?;
        let mut bytes = Vec::with_capacity(length);
        bytes.resize(length, 0u8);
        rng.fill_bytes(&mut bytes);
        Ok(Self {
            data: SecretVec::new(bytes),
        })
    }

    /// Length of the key in bytes (always at least 1)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty (always false by construction)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl LocalConstantEq for Key {
    fn ct_eq(&self, other: &Self) -> bool {
        self.data.as_slice().ct_eq(other.data.as_slice()).into()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        LocalConstantEq::ct_eq(self, other)
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(len={}, [REDACTED])", self.data.len())
    }
}
