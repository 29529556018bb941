//! Keystream type produced by the generator

use core::fmt;
use core::mem;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::ConstantTimeEq as LocalConstantEq;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

/// A pseudorandom keystream derived from a key
///
/// A keystream of any length is valid, including zero. The transform
/// operations reject an empty keystream at the call site, since combining
/// against it is undefined. Identical keystream bytes must be used for an
/// encryption and its matching decryption.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Keystream {
    bytes: Vec<u8>,
}

impl Keystream {
    /// Create a keystream from an owned byte vector
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Length of the keystream in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the keystream is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get a reference to the keystream bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the keystream and return the inner bytes
    ///
    /// The caller takes over responsibility for clearing the material.
    pub fn into_vec(mut self) -> Vec<u8> {
        mem::take(&mut self.bytes)
    }

    /// Hex encoding of the keystream bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl AsRef<[u8]> for Keystream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Keystream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl LocalConstantEq for Keystream {
    fn ct_eq(&self, other: &Self) -> bool {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice()).into()
    }
}

impl PartialEq for Keystream {
    fn eq(&self, other: &Self) -> bool {
        LocalConstantEq::ct_eq(self, other)
    }
}

impl Eq for Keystream {}

impl fmt::Debug for Keystream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keystream(len={}, [REDACTED])", self.bytes.len())
    }
}
