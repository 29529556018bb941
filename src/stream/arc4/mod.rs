//! ARC4-style stream cipher with additive combining
//!
//! This module implements the classic ARC4 state machine: a single
//! key-scheduling pass over a 256-entry permutation table, and a
//! generation loop that keeps permuting the table while emitting one
//! pseudorandom byte per step. The transform layer combines keystream and
//! text by addition mod 256 instead of XOR, so encryption and decryption
//! are distinct operations.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::security::EphemeralSecret;

#[cfg(feature = "alloc")]
use crate::types::{Key, Keystream};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

/// Number of entries in the permutation table
pub const STATE_SIZE: usize = 256;

/// Permutation of the 256 byte values, the cipher's internal memory
///
/// The table always contains each value in `0..=255` exactly once: it is
/// created as a keyed shuffle of the identity permutation and mutated
/// only by pairwise swaps. Indices are `u8`, so out-of-range access is
/// unrepresentable.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StateTable {
    s: [u8; STATE_SIZE],
}

impl StateTable {
    /// Build the initial permutation from a key
    ///
    /// Starts from the identity permutation, expands the key cyclically
    /// to 256 bytes, and runs the scheduling pass: for each position `i`,
    /// `j` advances by `s[i] + expanded[i]` mod 256 and the two positions
    /// are swapped. Errors with [`Error::InvalidKey`](crate::Error) if
    /// the key is empty.
    pub fn from_key(key: &[u8]) -> Result<Self> {
        validate::non_empty("StateTable::from_key", key.len())?;
        Ok(Self::schedule(key))
    }

    /// Scheduling pass over a key already known to be non-empty.
    fn schedule(key: &[u8]) -> Self {
        debug_assert!(!key.is_empty());

        let mut table = Self { s: [0u8; STATE_SIZE] };
        for (i, slot) in table.s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        // Key expansion buffer; zeroized as soon as scheduling completes.
        let mut expanded = EphemeralSecret::new([0u8; STATE_SIZE]);
        for (i, slot) in expanded.iter_mut().enumerate() {
            *slot = key[i % key.len()];
        }

        let mut j: u8 = 0;
        for i in 0..STATE_SIZE {
            j = j.wrapping_add(table.s[i]).wrapping_add(expanded[i]);
            table.swap(i as u8, j);
        }

        table
    }

    /// Exchange the values at positions `i` and `j`
    pub fn swap(&mut self, i: u8, j: u8) {
        self.s.swap(i as usize, j as usize);
    }

    /// Read the value at `index`
    pub fn value_at(&self, index: u8) -> u8 {
        self.s[index as usize]
    }
}

/// ARC4-style keystream generator
///
/// Owns a scheduled [`StateTable`] plus the two running indices of the
/// generation loop. Each [`next_byte`](Arc4::next_byte) call permutes the
/// table once, so the byte stream is strictly sequential: requesting
/// more bytes later continues the same sequence, and two generators
/// scheduled from the same key produce the same stream.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Arc4 {
    /// Live permutation state
    state: StateTable,
    /// Freshly-scheduled state retained for `reset`
    initial: StateTable,
    /// Step counter index
    i: u8,
    /// Accumulator index
    j: u8,
}

impl Arc4 {
    /// Create a generator by scheduling the given key
    ///
    /// Errors with [`Error::InvalidKey`](crate::Error) if the key is
    /// empty.
    pub fn new(key: &[u8]) -> Result<Self> {
        let state = StateTable::from_key(key)?;
        Ok(Self::from_state(state))
    }

    /// Create a generator from a [`Key`]
    ///
    /// Infallible: a `Key` is non-empty by construction.
    #[cfg(feature = "alloc")]
    pub fn from_key(key: &Key) -> Self {
        Self::from_state(StateTable::schedule(key.as_bytes()))
    }

    fn from_state(state: StateTable) -> Self {
        Self {
            initial: state.clone(),
            state,
            i: 0,
            j: 0,
        }
    }

    /// Run one generation step and emit the next keystream byte
    ///
    /// Advances `i` by one and `j` by `s[i]` (both mod 256), swaps the
    /// two positions, and emits `s[(s[i] + s[j]) mod 256]`.
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state.value_at(self.i));
        self.state.swap(self.i, self.j);

        let index = self
            .state
            .value_at(self.i)
            .wrapping_add(self.state.value_at(self.j));
        self.state.value_at(index)
    }

    /// Fill a buffer with keystream bytes from the live generator
    pub fn keystream_into(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Emit `length` keystream bytes
    ///
    /// A `length` of zero yields an empty keystream. Consecutive calls
    /// continue the same byte sequence.
    #[cfg(feature = "alloc")]
    pub fn keystream(&mut self, length: usize) -> Keystream {
        let mut bytes = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(self.next_byte());
        }
        Keystream::new(bytes)
    }

    /// Encrypt in place by adding keystream bytes mod 256
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte = byte.wrapping_add(self.next_byte());
        }
    }

    /// Decrypt in place by subtracting keystream bytes mod 256
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte = byte.wrapping_sub(self.next_byte());
        }
    }

    /// Rewind the generator to its freshly-scheduled state
    ///
    /// Restores the initial permutation and zeroes both running indices
    /// without re-running the scheduling pass.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.i = 0;
        self.j = 0;
    }
}

/// Generate a keystream of `length` bytes from a key
///
/// Errors with [`Error::InvalidKey`](crate::Error) if the key is empty.
/// A `length` of zero yields an empty keystream.
#[cfg(feature = "alloc")]
pub fn generate_keystream(key: &[u8], length: usize) -> Result<Keystream> {
    let mut cipher = Arc4::new(key)?;
    Ok(cipher.keystream(length))
}

/// Encrypt by adding keystream bytes to plaintext bytes mod 256
///
/// The keystream is consumed positionally and reused cyclically if it is
/// shorter than the plaintext. Errors with
/// [`Error::InvalidKey`](crate::Error) if the keystream is empty,
/// regardless of the plaintext.
#[cfg(feature = "alloc")]
pub fn encrypt(plaintext: &[u8], keystream: &Keystream) -> Result<Vec<u8>> {
    validate::non_empty("encrypt", keystream.len())?;
    let ks = keystream.as_bytes();

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for (p, &byte) in plaintext.iter().enumerate() {
        ciphertext.push(byte.wrapping_add(ks[p % ks.len()]));
    }
    Ok(ciphertext)
}

/// Decrypt by subtracting keystream bytes from ciphertext bytes mod 256
///
/// Wrapping subtraction on `u8` keeps every result in `0..=255`, the
/// exact inverse of [`encrypt`]. Errors with
/// [`Error::InvalidKey`](crate::Error) if the keystream is empty.
#[cfg(feature = "alloc")]
pub fn decrypt(ciphertext: &[u8], keystream: &Keystream) -> Result<Vec<u8>> {
    validate::non_empty("decrypt", keystream.len())?;
    let ks = keystream.as_bytes();

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for (p, &byte) in ciphertext.iter().enumerate() {
        plaintext.push(byte.wrapping_sub(ks[p % ks.len()]));
    }
    Ok(plaintext)
}
