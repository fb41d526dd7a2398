//! Field operators: multiply, square, small-constant multiply, add,
//! subtract, negate.
//!
//! Every operator produces 64-bit column sums (from a widening product or
//! limb-wise) and hands them to the reduction engine. None of them reads
//! its inputs after it starts writing its output, so `a = a * b` and
//! friends are safe.

use std::array;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use zeroize::Zeroizing;

use super::{FieldElement, P3};
use crate::primitives::{Portable, WideMultiplier};

/// `(486662 + 2) / 4`, the Montgomery ladder constant of Curve25519.
pub const A24: u32 = 121_666;

impl FieldElement {
    /// Multiplies through an explicit widening backend.
    ///
    /// The wide product is wiped as soon as it has been reduced.
    pub fn mul_with<B: WideMultiplier>(&self, rhs: &FieldElement) -> FieldElement {
        let wide = Zeroizing::new(B::mul_wide(&self.0, &rhs.0));

        FieldElement::reduce(&wide)
    }

    /// Squares through an explicit widening backend.
    pub fn square_with<B: WideMultiplier>(&self) -> FieldElement {
        let wide = Zeroizing::new(B::square_wide(&self.0));

        FieldElement::reduce(&wide)
    }

    /// Computes `self²` with the [`Portable`] backend.
    ///
    /// Same result as `self * self`, cheaper.
    pub fn square(&self) -> FieldElement {
        self.square_with::<Portable>()
    }

    /// Multiplies this field element by the constant `121666`.
    ///
    /// The constant comes from the Montgomery form
    /// `y² = x³ + 486662·x² + x`, where `(486662 + 2) / 4 = 121666`, and
    /// appears once per Montgomery ladder step.
    ///
    /// No 16-limb product is needed: each `121666 · f[i]` fits in 49 bits,
    /// so the columns go straight to the fold. The result is `< 2²⁵⁵ + 2²³`.
    pub fn mul121666(&self) -> FieldElement {
        FieldElement::fold(self.0.map(|limb| A24 as u64 * limb as u64))
    }
}

/// Field element multiplication.
///
/// Widening schoolbook product followed by the `2²⁵⁶ ≡ 38` reduction. The
/// result is lazily reduced, `< 2²⁵⁵ + 2¹¹`.
impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_with::<Portable>(&rhs)
    }
}

/// Field element addition.
///
/// Limb-wise 33-bit column sums, carried and folded. Any two lazy inputs
/// are accepted; the result is `< 2²⁵⁵ + 2¹¹`.
impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement::fold(array::from_fn(|i| self.0[i] as u64 + rhs.0[i] as u64))
    }
}

/// Field element subtraction.
///
/// Computes `3p − rhs + self` column by column before carrying. The `3p`
/// bias keeps every column non-negative for any pair of lazy inputs, and
/// adding a multiple of `p` does not change the residue.
impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement::fold(array::from_fn(|i| {
            P3[i] - rhs.0[i] as u64 + self.0[i] as u64
        }))
    }
}

/// Field element negation, `0 − self`.
impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        FieldElement::ZERO - self
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
