//! Arithmetic in the prime field of Curve25519 / Ed25519
//!
//! This crate provides the field layer, integers modulo
//! `p = 2²⁵⁵ − 19`, that Nebula's elliptic-curve point arithmetic, scalar
//! multiplication ladders, key exchange and signatures are built on.
//!
//! The focus is on **predictable, constant-time limb arithmetic** with an
//! explicit lazy-reduction discipline, rather than on a broad numeric API.
//!
//! # Module overview
//!
//! - `field`
//!   The [`FieldElement`] type: eight 32-bit limbs, lazily reduced.
//!   Multiplication, squaring, the Montgomery constant multiply, addition,
//!   subtraction and negation all funnel into one reduction engine based on
//!   `2²⁵⁵ ≡ 19 (mod p)`. Inversion and the square-root power
//!   `z^(2²⁵² − 3)` are fixed addition chains. Canonical 32-byte encoding,
//!   decoding and the zero/sign tests live here as well.
//!
//! - `primitives`
//!   The collaborators the field is built on: widening multiply/square
//!   behind the [`WideMultiplier`](primitives::WideMultiplier) trait,
//!   constant-time conditional subtraction and comparison, and
//!   little-endian word packing.
//!
//! - `error`
//!   [`FieldError`], returned only by the strict decoders.
//!
//! # Lazy and canonical form
//!
//! Every operator accepts any 8-limb value and returns a value congruent to
//! the exact result that may still be `≥ p` (it is always `< 2p`). Only
//! [`FieldElement::to_bytes`] and the tests built on it (`is_zero`,
//! `is_nonzero`, `is_negative`, equality) canonicalize.
//!
//! # Design goals
//!
//! - No heap allocations
//! - No secret-dependent branches, loop bounds or memory accesses
//! - Scratch values cleared with [`zeroize`] on every exit path
//! - Wire compatibility: decoding masks bit 255 and never rejects
//!
//! This crate does not implement curve points, scalar arithmetic, protocols
//! or randomness; those live at higher layers of the Nebula stack.

mod error;
mod field;

pub mod primitives;

pub use error::FieldError;
pub use field::{A24, FieldElement};
