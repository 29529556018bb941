//! ARC4-style stream cipher with additive combining
//!
//! This crate implements a byte-stream cipher built from the classic ARC4
//! state machine: a key-scheduling pass turns a short secret key into a
//! pseudorandom permutation of the 256 byte values, and a generation loop
//! drives that permutation to emit an arbitrarily long keystream. Unlike
//! ARC4 proper, plaintext and keystream are combined by addition mod 256
//! (and decryption by subtraction), not by XOR.
//!
//! The library is designed to be usable in both `std` and `no_std`
//! environments; the `Vec`-backed [`Key`] and [`Keystream`] types and the
//! one-shot [`generate_keystream`]/[`encrypt`]/[`decrypt`] operations
//! require the `alloc` feature.
//!
//! # Security Considerations
//!
//! This is a faithful rendition of a legacy construction. The ARC4
//! keystream has well-known statistical biases and the cipher provides no
//! authentication; do not use it to protect new data. Key material,
//! permutation state, and generated keystreams are all zeroized on drop.
//!
//! # Examples
//!
//! One-shot encryption and decryption with a generated keystream:
//!
//! ```
//! use arcadd::{decrypt, encrypt, generate_keystream};
//!
//! let keystream = generate_keystream(b"my secret key", 16)?;
//!
//! let ciphertext = encrypt(b"attack at dawn!", &keystream)?;
//! let plaintext = decrypt(&ciphertext, &keystream)?;
//! assert_eq!(plaintext, b"attack at dawn!");
//! # Ok::<(), arcadd::Error>(())
//! ```
//!
//! Streaming operation with a live generator:
//!
//! ```
//! use arcadd::Arc4;
//!
//! let mut cipher = Arc4::new(b"my secret key")?;
//! let mut buffer = *b"attack at dawn!";
//! cipher.encrypt_in_place(&mut buffer);
//!
//! cipher.reset();
//! cipher.decrypt_in_place(&mut buffer);
//! assert_eq!(&buffer, b"attack at dawn!");
//! # Ok::<(), arcadd::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Secure memory handling
pub mod security;
#[cfg(feature = "alloc")]
pub use security::SecretVec;
pub use security::EphemeralSecret;

// Type system
pub mod types;
pub use types::ConstantTimeEq;
#[cfg(feature = "alloc")]
pub use types::{Key, Keystream};

// Stream cipher implementation
pub mod stream;
pub use stream::arc4::{Arc4, StateTable, STATE_SIZE};
#[cfg(feature = "alloc")]
pub use stream::arc4::{decrypt, encrypt, generate_keystream};
