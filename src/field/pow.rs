//! Fixed exponentiation chains: inversion and the square-root power.
//!
//! Both chains are straight-line sequences of squarings and multiplications
//! built from the repunit powers `z^(2ᵏ − 1)` for k = 5, 10, 20, 50, 100.
//! The sequence never depends on the input or on exponent bits read at run
//! time, which is what makes them constant-time. Do not replace them with a
//! square-and-multiply loop.

use zeroize::Zeroizing;

use super::FieldElement;

impl FieldElement {
    /// Squares `self` `n` times, giving `self^(2ⁿ)`.
    ///
    /// The iteration count depends only on `n`, which every caller passes
    /// as a literal.
    pub fn n_square(&self, n: usize) -> FieldElement {
        let mut acc = Zeroizing::new(*self);

        for _ in 0..n {
            *acc = acc.square();
        }

        *acc
    }

    /// Computes the multiplicative inverse `self^(p − 2)`.
    ///
    /// By Fermat's little theorem `x^(p−2) · x ≡ 1` for every non-zero `x`.
    /// `p − 2 = 2²⁵⁵ − 21` is reached with 254 squarings and 11
    /// multiplications.
    ///
    /// Zero has no inverse; the chain maps it to zero without any special
    /// case.
    ///
    /// All intermediate powers are wiped before returning.
    pub fn invert(&self) -> FieldElement {
        let z = Zeroizing::new(*self);

        let mut t0 = Zeroizing::new(z.square()); // z^2
        let mut t1 = Zeroizing::new(t0.n_square(2)); // z^8
        *t1 = *z * *t1; // z^9
        *t0 = *t0 * *t1; // z^11

        let mut t2 = Zeroizing::new(t0.square()); // z^22
        *t1 = *t1 * *t2; // z^(2^5 - 1)

        *t2 = t1.n_square(5);
        *t1 = *t2 * *t1; // z^(2^10 - 1)

        *t2 = t1.n_square(10);
        *t2 = *t2 * *t1; // z^(2^20 - 1)

        let mut t3 = Zeroizing::new(t2.n_square(20));
        *t2 = *t3 * *t2; // z^(2^40 - 1)

        *t2 = t2.n_square(10);
        *t1 = *t2 * *t1; // z^(2^50 - 1)

        *t2 = t1.n_square(50);
        *t2 = *t2 * *t1; // z^(2^100 - 1)

        *t3 = t2.n_square(100);
        *t2 = *t3 * *t2; // z^(2^200 - 1)

        *t2 = t2.n_square(50);
        *t1 = *t2 * *t1; // z^(2^250 - 1)

        *t1 = t1.n_square(5); // z^(2^255 - 32)

        *t1 * *t0 // z^(2^255 - 21)
    }

    /// Computes `self^(2²⁵² − 3)`, i.e. `self^((p − 5) / 8)`.
    ///
    /// Used by point decompression to take square roots modulo `p`
    /// (`p ≡ 5 mod 8`). Same repunit skeleton as [`FieldElement::invert`],
    /// with a different head and tail.
    ///
    /// All intermediate powers are wiped before returning.
    pub fn pow22523(&self) -> FieldElement {
        let z = Zeroizing::new(*self);

        let mut t0 = Zeroizing::new(z.square()); // z^2
        let mut t1 = Zeroizing::new(t0.n_square(2)); // z^8
        *t1 = *z * *t1; // z^9
        *t0 = *t0 * *t1; // z^11

        *t0 = t0.square(); // z^22
        *t0 = *t1 * *t0; // z^(2^5 - 1)

        *t1 = t0.n_square(5);
        *t0 = *t1 * *t0; // z^(2^10 - 1)

        *t1 = t0.n_square(10);
        *t1 = *t1 * *t0; // z^(2^20 - 1)

        let mut t2 = Zeroizing::new(t1.n_square(20));
        *t1 = *t2 * *t1; // z^(2^40 - 1)

        *t1 = t1.n_square(10);
        *t0 = *t1 * *t0; // z^(2^50 - 1)

        *t1 = t0.n_square(50);
        *t1 = *t1 * *t0; // z^(2^100 - 1)

        *t2 = t1.n_square(100);
        *t1 = *t2 * *t1; // z^(2^200 - 1)

        *t1 = t1.n_square(50);
        *t0 = *t1 * *t0; // z^(2^250 - 1)

        *t0 = t0.n_square(2); // z^(2^252 - 4)

        *t0 * *z // z^(2^252 - 3)
    }
}
