//! Double-width products of field limbs.
//!
//! A [`WideElement`] is the unreduced 512-bit result of multiplying two
//! 256-bit limb arrays. It is stored as 16 limbs of 32 significant bits each,
//! held in `u64` slots so the reduction engine can scale them by small
//! constants without leaving 64-bit arithmetic.
//!
//! How the product is computed sits behind [`WideMultiplier`]. The reduction
//! engine only sees the finished [`WideElement`], so an optimized backend
//! (assembly, SIMD, Karatsuba) can replace [`Portable`] without touching
//! anything above it.

use std::fmt;

use zeroize::Zeroize;

/// Low 32 bits of a 64-bit accumulator.
const MASK_32: u64 = 0xffff_ffff;

/// Unreduced 512-bit product, least significant limb first.
///
/// Backends must return normalized limbs: every entry `< 2³²`. The reduction
/// engine relies on that bound and silently produces garbage otherwise.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WideElement(pub(crate) [u64; 16]);

impl WideElement {
    /// The zero product.
    pub const ZERO: Self = WideElement([0u64; 16]);

    /// Wraps raw limbs. Each limb must be `< 2³²`.
    pub const fn from_limbs(limbs: [u64; 16]) -> Self {
        WideElement(limbs)
    }

    /// Returns the 16 limbs, least significant first.
    pub fn limbs(&self) -> &[u64; 16] {
        &self.0
    }
}

impl fmt::Debug for WideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WideElement(..)")
    }
}

impl Zeroize for WideElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A constant-time widening multiplier over 8×32-bit limb arrays.
///
/// Implementations must:
/// - run in time independent of the limb values,
/// - return normalized limbs (`< 2³²` each),
/// - produce the exact integer product, with no reduction applied.
pub trait WideMultiplier {
    /// Full 512-bit product `a · b`.
    fn mul_wide(a: &[u32; 8], b: &[u32; 8]) -> WideElement;

    /// Full 512-bit square `a²`.
    ///
    /// Defaults to `mul_wide(a, a)`; backends with a cheaper squaring
    /// override it.
    fn square_wide(a: &[u32; 8]) -> WideElement {
        Self::mul_wide(a, a)
    }
}

/// Portable schoolbook backend using 32×32→64-bit products.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl WideMultiplier for Portable {
    fn mul_wide(a: &[u32; 8], b: &[u32; 8]) -> WideElement {
        let mut out = [0u64; 16];

        for (i, &ai) in a.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &bj) in b.iter().enumerate() {
                // (2³² − 1)² + 2·(2³² − 1) = 2⁶⁴ − 1, so this never wraps.
                let t = (ai as u64) * (bj as u64) + out[i + j] + carry;
                out[i + j] = t & MASK_32;
                carry = t >> 32;
            }

            out[i + 8] = carry;
        }

        WideElement(out)
    }

    /// Squares by computing each cross product once and doubling.
    fn square_wide(a: &[u32; 8]) -> WideElement {
        let mut out = [0u64; 16];

        // Off-diagonal terms a[i]·a[j] with i < j.
        for i in 0..7 {
            let mut carry = 0u64;

            for j in (i + 1)..8 {
                let t = (a[i] as u64) * (a[j] as u64) + out[i + j] + carry;
                out[i + j] = t & MASK_32;
                carry = t >> 32;
            }

            out[i + 8] = carry;
        }

        // Double them. The full square fits in 512 bits, so nothing
        // shifts out of the top limb.
        let mut carry = 0u64;
        for limb in out.iter_mut() {
            let shifted = (*limb << 1) | carry;
            carry = *limb >> 31;
            *limb = shifted & MASK_32;
        }

        // Diagonal terms a[i]².
        let mut carry = 0u64;
        for (i, &ai) in a.iter().enumerate() {
            let sq = (ai as u64) * (ai as u64);

            let lo = out[2 * i] + (sq & MASK_32) + carry;
            out[2 * i] = lo & MASK_32;
            carry = lo >> 32;

            let hi = out[2 * i + 1] + (sq >> 32) + carry;
            out[2 * i + 1] = hi & MASK_32;
            carry = hi >> 32;
        }

        WideElement(out)
    }
}
