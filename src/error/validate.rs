//! Validation utilities for cipher operations

use super::{Error, Result};

/// Validate that key material is non-empty
#[inline(always)]
pub fn non_empty(context: &'static str, length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::InvalidKey { context });
    }
    Ok(())
}
