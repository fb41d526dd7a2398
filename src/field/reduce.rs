//! Reduction engine: folds 64-bit columns into a lazy field element.

use std::array;

use super::FieldElement;
use crate::primitives::WideElement;

/// Low 32 bits of an accumulator.
const MASK_32: u64 = 0xffff_ffff;

/// The 31 significant bits of the top limb.
const MASK_31: u64 = 0x7fff_ffff;

impl FieldElement {
    /// Carries 8 column sums into limbs and folds the overflow mod `p`.
    ///
    /// Column `i` carries weight `2³²ⁱ`. Limbs 0–6 keep 32 bits, limb 7
    /// keeps 31; whatever is carried past bit 255 is multiplied by 19
    /// (`2²⁵⁵ ≡ 19`) and added back from limb 0 in a second pass.
    ///
    /// Each column must stay below `2⁶³` for the result to be correct. The
    /// accumulator wraps instead of panicking when a caller breaks that.
    /// After the first pass the value is `< 2²⁵⁵`; the folded carry is small
    /// enough that the second pass never carries out of limb 7.
    pub(crate) fn fold(columns: [u64; 8]) -> FieldElement {
        let mut limbs = [0u32; 8];
        let mut acc = 0u64;

        for (limb, &column) in limbs.iter_mut().zip(columns.iter()).take(7) {
            acc = acc.wrapping_add(column);
            *limb = (acc & MASK_32) as u32;
            acc >>= 32;
        }

        acc = acc.wrapping_add(columns[7]);
        limbs[7] = (acc & MASK_31) as u32;
        acc >>= 31;

        acc = acc.wrapping_mul(19);

        for limb in limbs.iter_mut() {
            acc = acc.wrapping_add(*limb as u64);
            *limb = (acc & MASK_32) as u32;
            acc >>= 32;
        }

        FieldElement(limbs)
    }

    /// Reduces a 512-bit product to a lazy field element.
    ///
    /// The upper 8 limbs are scaled by 38 (`2²⁵⁶ ≡ 38 mod p`) and added onto
    /// the lower 8 before the usual fold.
    ///
    /// ## Bounds
    ///
    /// Input limbs must be `< 2³²`, as every [`WideMultiplier`] backend
    /// guarantees. The result has limbs `< 2³²` and value `< 2²⁵⁵ + 2¹¹`.
    /// Oversized limbs give a meaningless element, never a panic.
    ///
    /// ## Constant-time behavior
    ///
    /// Fixed 8-column loop, no data-dependent branches.
    ///
    /// [`WideMultiplier`]: crate::primitives::WideMultiplier
    pub fn reduce(wide: &WideElement) -> FieldElement {
        let t = &wide.0;

        FieldElement::fold(array::from_fn(|i| {
            t[i].wrapping_add(t[i + 8].wrapping_mul(38))
        }))
    }
}
