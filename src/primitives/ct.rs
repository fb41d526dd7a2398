//! Constant-time helpers shared by the field layer.
//!
//! Nothing in here branches on, or indexes memory by, the values it is
//! given. Selection goes through [`subtle`] so the compiler cannot turn a
//! mask into a branch.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Subtracts `modulus` from `x` exactly when `high·2²⁵⁶ + x ≥ modulus`.
///
/// `high` extends `x` with one extra word above its top limb; the field
/// layer always passes `0`. The difference is computed unconditionally and
/// then selected with a mask, so the running time does not depend on
/// whether the subtraction took effect.
///
/// After the call `x < modulus` holds whenever the input was below
/// `2 · modulus`.
pub fn conditional_subtract(x: &mut [u32; 8], modulus: &[u32; 8], high: u32) {
    let mut diff = [0u32; 8];
    let mut borrow = 0u64;

    for ((d, &a), &m) in diff.iter_mut().zip(x.iter()).zip(modulus.iter()) {
        let t = (a as u64).wrapping_sub(m as u64).wrapping_sub(borrow);
        *d = t as u32;
        borrow = t >> 63;
    }

    // A borrow out of the extension word means x < modulus.
    let borrow = (high as u64).wrapping_sub(borrow) >> 63;
    let keep = Choice::from(borrow as u8);

    for (a, d) in x.iter_mut().zip(diff.iter()) {
        *a = u32::conditional_select(d, a, keep);
    }

    diff.zeroize();
}

/// Compares two 32-byte strings without leaking where they differ.
///
/// Every byte pair is visited, whatever the inputs.
#[inline(always)]
pub fn equal_32(x: &[u8; 32], y: &[u8; 32]) -> Choice {
    x[..].ct_eq(&y[..])
}
