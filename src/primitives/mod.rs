//! Low-level building blocks for the field layer.
//!
//! These are the collaborators the field arithmetic is built on, kept apart
//! so that each has a small, checkable contract:
//! - `wide`: widening multiply/square into an unreduced 512-bit product,
//!   behind the [`WideMultiplier`] trait so backends can be swapped
//! - `ct`: constant-time conditional subtraction and byte-string equality
//! - `words`: little-endian packing of `u32` words and limb arrays
//!
//! None of them know about the modulus; that lives in `field`.

pub mod ct;
pub mod words;
mod wide;

pub use wide::{Portable, WideElement, WideMultiplier};
