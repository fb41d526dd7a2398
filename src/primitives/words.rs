//! Little-endian conversions between bytes, `u32` words and limb arrays.
//!
//! A field element travels on the wire as eight 32-bit words in
//! little-endian order, least significant word first. These helpers are the
//! only place where that layout is spelled out.

#[cfg(not(feature = "speed"))]
/// Reads 4 bytes as a little-endian `u32`.
#[inline(always)]
pub fn unpack_u32_le(input: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*input)
}

#[cfg(feature = "speed")]
/// Reads 4 bytes as a little-endian `u32` (shift/or fast path).
#[inline(always)]
pub fn unpack_u32_le(input: &[u8; 4]) -> u32 {
    (input[0] as u32)
        | ((input[1] as u32) << 8)
        | ((input[2] as u32) << 16)
        | ((input[3] as u32) << 24)
}

#[cfg(not(feature = "speed"))]
/// Writes `value` into `output`, little-endian.
#[inline(always)]
pub fn pack_u32_le(output: &mut [u8; 4], value: u32) {
    *output = value.to_le_bytes();
}

#[cfg(feature = "speed")]
/// Writes `value` into `output`, little-endian (fast path).
#[inline(always)]
pub fn pack_u32_le(output: &mut [u8; 4], value: u32) {
    output[0] = value as u8;
    output[1] = (value >> 8) as u8;
    output[2] = (value >> 16) as u8;
    output[3] = (value >> 24) as u8;
}

/// Splits 32 bytes into 8 little-endian limbs.
pub fn unpack_limbs(input: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];

    for (limb, chunk) in limbs.iter_mut().zip(input.chunks_exact(4)) {
        let mut word = [0u8; 4];
        word.copy_from_slice(chunk);
        *limb = unpack_u32_le(&word);
    }

    limbs
}

/// Joins 8 limbs into 32 bytes, least significant limb first.
pub fn pack_limbs(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];

    for (chunk, &limb) in out.chunks_exact_mut(4).zip(limbs.iter()) {
        let mut word = [0u8; 4];
        pack_u32_le(&mut word, limb);
        chunk.copy_from_slice(&word);
    }

    out
}
