//! Zero and sign tests on the canonical encoding.

use subtle::Choice;
use zeroize::Zeroizing;

use super::FieldElement;
use crate::primitives::ct::equal_32;

impl FieldElement {
    /// Returns a set `Choice` if this element is non-zero mod `p`.
    ///
    /// The element is canonicalized first, so `p` itself counts as zero.
    /// The comparison against the zero encoding visits all 32 bytes.
    pub fn is_nonzero(&self) -> Choice {
        !self.is_zero()
    }

    /// Returns a set `Choice` if this element is zero mod `p`.
    pub fn is_zero(&self) -> Choice {
        let bytes = Zeroizing::new(self.to_bytes());

        equal_32(&bytes, &[0u8; 32])
    }

    /// Returns a set `Choice` if this element is "negative".
    ///
    /// The field has no sign; by the Ed25519 convention an element is
    /// negative when its canonical encoding is odd, i.e. bit 0 of byte 0
    /// is set.
    pub fn is_negative(&self) -> Choice {
        let bytes = Zeroizing::new(self.to_bytes());

        Choice::from(bytes[0] & 1)
    }
}
