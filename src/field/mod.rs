//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! which is the numeric substrate of the Curve25519 and Ed25519 point and
//! scalar-multiplication code built on top of it.
//!
//! ## Representation
//!
//! Field elements are 8 unsigned 32-bit limbs in radix 2³², least
//! significant limb first:
//!
//! ```text
//! x = x₀ + x₁·2³² + x₂·2⁶⁴ + … + x₇·2²²⁴
//! ```
//!
//! Two forms coexist:
//! - **lazy**: what every operator returns. Each limb is `< 2³²` and the
//!   value is congruent to the right result, but may exceed `p`
//!   (it always stays below `2²⁵⁵ + 2²³ < 2p`),
//! - **canonical**: the unique representative in `[0, p)`, obtained only by
//!   [`FieldElement::to_bytes`].
//!
//! Operators accept any lazy input and never promise canonical output.
//!
//! ## Reduction
//!
//! Since `2²⁵⁵ ≡ 19 (mod p)`, also `2²⁵⁶ ≡ 38`. Double-width products are
//! folded by scaling their upper half by 38, carrying through seven 32-bit
//! boundaries and one 31-bit boundary, and folding the final carry back in
//! multiplied by 19. Additions, subtractions and the small-constant
//! multiply go through the same fold.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: fixed loop bounds, no branches or memory
//!   accesses that depend on limb values.
//! - **Overflow safety**: every column is accumulated in `u64` with a
//!   documented bound.
//! - **Fixed addition chains** for inversion and the square-root power.
//! - **Scratch hygiene**: temporaries holding intermediate powers, wide
//!   products and canonical encodings are wiped with [`zeroize`] when they
//!   go out of scope.

mod arith;
mod encoding;
mod pow;
mod props;
mod reduce;

use std::fmt::{Debug, Formatter, Result};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

pub use arith::A24;

/// Field element modulo `2²⁵⁵ − 19`, stored as 8 little-endian 32-bit limbs.
///
/// Values produced by arithmetic are only lazily reduced; see the module
/// documentation for the bounds.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) [u32; 8]);

/// The limb-wise multiple `3p`, used to bias subtraction.
///
/// Every entry is at least `0x1_7fff_fffd`, larger than any 32-bit limb, so
/// `3p[i] − y[i] + x[i]` cannot go negative.
pub(crate) const P3: [u64; 8] = [
    0x2_ffff_ffc7,
    0x2_ffff_fffd,
    0x2_ffff_fffd,
    0x2_ffff_fffd,
    0x2_ffff_fffd,
    0x2_ffff_fffd,
    0x2_ffff_fffd,
    0x1_7fff_fffd,
];

impl FieldElement {
    /// The additive identity (0).
    pub const ZERO: Self = FieldElement([0u32; 8]);

    /// The multiplicative identity (1).
    pub const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0]);

    /// The modulus `p = 2²⁵⁵ − 19`, which is congruent to zero.
    pub const P: Self = FieldElement([
        0xffff_ffed,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0x7fff_ffff,
    ]);

    /// Returns the raw limbs, least significant first.
    ///
    /// The value is whatever lazy representative the last operation left
    /// behind; use [`FieldElement::to_bytes`] for the canonical one.
    pub fn to_limbs(&self) -> [u32; 8] {
        self.0
    }
}

/// Limbs are secret material and never printed.
impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("FieldElement(..)")
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConditionallySelectable for FieldElement {
    /// Picks `a` when `choice` is 0 and `b` when it is 1, limb by limb.
    ///
    /// `conditional_assign` and `conditional_swap` come from the trait and
    /// serve as the ladder's cmov/cswap.
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u32; 8];

        for ((o, x), y) in out.iter_mut().zip(a.0.iter()).zip(b.0.iter()) {
            *o = u32::conditional_select(x, y, choice);
        }

        FieldElement(out)
    }
}

impl ConstantTimeEq for FieldElement {
    /// Two elements are equal when their canonical encodings are.
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut lhs = self.to_bytes();
        let mut rhs = other.to_bytes();
        let eq = lhs[..].ct_eq(&rhs[..]);

        lhs.zeroize();
        rhs.zeroize();

        eq
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
