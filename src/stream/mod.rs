//! Stream cipher implementation
//!
//! This module provides the ARC4-style keystream generator and its
//! additive transform layer. Stream ciphers of this family encrypt
//! plaintext bytes one at a time against a pseudorandom keystream.
//!
//! # Security Considerations
//!
//! The generator is deterministic in the key alone: encrypting two
//! messages with the same key reuses the same keystream, which lets an
//! attacker cancel it out. Use a fresh key per message.

/// ARC4-style permutation engine, keystream generator, and transforms
pub mod arc4;

// Re-export commonly used items
pub use arc4::{Arc4, StateTable, STATE_SIZE};

#[cfg(feature = "alloc")]
pub use arc4::{decrypt, encrypt, generate_keystream};
