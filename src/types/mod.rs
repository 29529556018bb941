//! Type-safe wrappers for cipher inputs and outputs
//!
//! The short secret seeding the permutation and the derived keystream are
//! kept as two distinct types, [`Key`] and [`Keystream`], even though both
//! are byte sequences at the arithmetic level. The transform operations
//! accept only a [`Keystream`], so a short secret cannot be passed where
//! positional keystream material is expected.

// Submodules
#[cfg(feature = "alloc")]
pub mod key;
#[cfg(feature = "alloc")]
pub mod keystream;

// Re-export main types
#[cfg(feature = "alloc")]
pub use key::Key;
#[cfg(feature = "alloc")]
pub use keystream::Keystream;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
