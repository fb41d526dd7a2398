//! 32-byte little-endian encoding of field elements.
//!
//! Wire format: eight 32-bit limbs, least significant first, each stored
//! little-endian. Encoders always emit the canonical value, so bit 255 is
//! 0. Decoders ignore bit 255 whatever its transmitted value.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::FieldElement;
use crate::error::FieldError;
use crate::primitives::{ct::conditional_subtract, words};

impl FieldElement {
    /// Encodes this element in canonical form.
    ///
    /// Lazy values are always `< 2p`, so a single constant-time conditional
    /// subtraction of `p` brings them into `[0, p)`. The canonicalized limb
    /// copy is wiped after packing.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = Zeroizing::new(self.0);
        conditional_subtract(&mut limbs, &FieldElement::P.0, 0);

        words::pack_limbs(&limbs)
    }

    /// Decodes 32 little-endian bytes, clearing bit 255.
    ///
    /// No value is rejected. Encodings of `[2²⁵⁵ − 19, 2²⁵⁵)` decode to
    /// their (non-canonical) integer and behave as the matching residue in
    /// arithmetic, but re-encode to that residue rather than to the input
    /// bytes. Bit 255 is masked, which reduces the input mod `2²⁵⁵`, not
    /// mod `p`. Wire compatibility depends on this; see
    /// [`FieldElement::from_canonical_bytes`] for the strict variant.
    pub fn from_bytes(input: &[u8; 32]) -> FieldElement {
        let mut limbs = words::unpack_limbs(input);
        limbs[7] &= 0x7fff_ffff;

        FieldElement(limbs)
    }

    /// Decodes 32 bytes, rejecting anything that is not the canonical
    /// encoding of its value.
    ///
    /// Fails with [`FieldError::NonCanonical`] when bit 255 is set or the
    /// value is `≥ p`, and with [`FieldError::InvalidLength`] when `input`
    /// is not 32 bytes long.
    ///
    /// The canonicality test itself is constant-time; only the final
    /// accept/reject branches, and that outcome is public.
    pub fn from_canonical_bytes(input: &[u8]) -> Result<FieldElement, FieldError> {
        let bytes: &[u8; 32] = input
            .try_into()
            .map_err(|_| FieldError::InvalidLength(input.len()))?;

        let element = FieldElement::from_bytes(bytes);
        let reencoded = Zeroizing::new(element.to_bytes());

        if bool::from(reencoded[..].ct_eq(&bytes[..])) {
            Ok(element)
        } else {
            Err(FieldError::NonCanonical)
        }
    }
}

/// Length-checked form of [`FieldElement::from_bytes`].
///
/// Accepts exactly 32 bytes and masks bit 255 like the array decoder.
impl TryFrom<&[u8]> for FieldElement {
    type Error = FieldError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; 32] = value
            .try_into()
            .map_err(|_| FieldError::InvalidLength(value.len()))?;

        Ok(FieldElement::from_bytes(bytes))
    }
}
