//! Errors reported by the strict decoders.
//!
//! Field arithmetic itself cannot fail: every lazy input has a defined
//! result and inverting zero yields zero. Only byte-level decoding with
//! explicit validation returns these.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Errors that can occur while decoding a field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The input was not exactly 32 bytes long; holds the actual length.
    InvalidLength(usize),
    /// The input had bit 255 set or encoded a value `≥ p`.
    NonCanonical,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FieldError::InvalidLength(len) => {
                write!(f, "field element encoding must be 32 bytes, got {len}")
            }
            FieldError::NonCanonical => f.write_str("non-canonical field element encoding"),
        }
    }
}

impl Error for FieldError {}
