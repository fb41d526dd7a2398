#![allow(dead_code)]

use num_bigint::BigUint;

/// p = 2^255 - 19
pub fn modulus() -> BigUint {
    (BigUint::from(1u8) << 255usize) - 19u8
}

pub fn big_from_le(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

pub fn big_from_limbs(limbs: &[u32]) -> BigUint {
    BigUint::from_slice(limbs)
}

/// Little-endian 32-byte encoding of `value mod p`.
pub fn canonical_bytes(value: &BigUint) -> [u8; 32] {
    let reduced = value % modulus();
    let le = reduced.to_bytes_le();

    let mut out = [0u8; 32];
    out[..le.len()].copy_from_slice(&le);

    out
}

/// Encoding of `p - k`, for small `k`.
pub fn p_minus(k: u8) -> [u8; 32] {
    let mut bytes = [0xffu8; 32];
    bytes[0] = 0xed - k;
    bytes[31] = 0x7f;

    bytes
}
