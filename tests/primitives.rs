mod common;

use common::{big_from_limbs, canonical_bytes};
use fe25519::{A24, FieldElement};
use fe25519::primitives::{
    Portable, WideElement, WideMultiplier,
    ct::{conditional_subtract, equal_32},
    words::{pack_limbs, pack_u32_le, unpack_limbs, unpack_u32_le},
};

use num_bigint::BigUint;
use rand::{RngCore, SeedableRng, rngs::StdRng};

const P: [u32; 8] = [
    0xffff_ffed,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0x7fff_ffff,
];

fn random_limbs(rng: &mut StdRng) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for limb in limbs.iter_mut() {
        *limb = rng.next_u32();
    }

    limbs
}

#[test]
fn u32_word_packing() {
    assert_eq!(unpack_u32_le(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
    assert_eq!(unpack_u32_le(&[0xef, 0xbe, 0xad, 0xde]), 0xdead_beef);

    let mut out = [0u8; 4];
    pack_u32_le(&mut out, 0x1234_5678);
    assert_eq!(out, [0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn limb_packing_is_little_endian() {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }

    let limbs = unpack_limbs(&bytes);
    assert_eq!(limbs[0], 0x0302_0100);
    assert_eq!(limbs[7], 0x1f1e_1d1c);
    assert_eq!(pack_limbs(&limbs), bytes);
}

#[test]
fn conditional_subtract_vectors() {
    let mut x = P;
    conditional_subtract(&mut x, &P, 0);
    assert_eq!(x, [0u32; 8]);

    let mut below = P;
    below[0] -= 1;
    let mut x = below;
    conditional_subtract(&mut x, &P, 0);
    assert_eq!(x, below);

    // 2p - 1 -> p - 1
    let mut x = [0xffff_ffffu32; 8];
    x[0] = 0xffff_ffd9;
    conditional_subtract(&mut x, &P, 0);
    assert_eq!(x, below);

    // 2^256 - p = 2^255 + 19
    let mut x = [0u32; 8];
    conditional_subtract(&mut x, &P, 1);
    assert_eq!(x, [19, 0, 0, 0, 0, 0, 0, 0x8000_0000]);
}

#[test]
fn equal_32_compares_every_byte() {
    let a = [7u8; 32];
    assert!(bool::from(equal_32(&a, &a)));

    for i in 0..32 {
        let mut b = a;
        b[i] ^= 1;
        assert!(!bool::from(equal_32(&a, &b)));
    }
}

#[test]
fn portable_products_match_reference() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut cases = vec![([0xffff_ffffu32; 8], [0xffff_ffffu32; 8]), ([0u32; 8], P)];
    for _ in 0..1_000 {
        cases.push((random_limbs(&mut rng), random_limbs(&mut rng)));
    }

    for (a, b) in cases {
        let product = Portable::mul_wide(&a, &b);
        let square = Portable::square_wide(&a);

        let limbs32 = |w: &WideElement| -> Vec<u32> {
            w.limbs()
                .iter()
                .map(|&l| {
                    assert!(l < (1u64 << 32));
                    l as u32
                })
                .collect()
        };

        assert_eq!(
            big_from_limbs(&limbs32(&product)),
            big_from_limbs(&a) * big_from_limbs(&b)
        );
        assert_eq!(
            big_from_limbs(&limbs32(&square)),
            big_from_limbs(&a) * big_from_limbs(&a)
        );
        assert_eq!(square, Portable::mul_wide(&a, &a));
    }
}

#[test]
fn reduce_matches_reference() {
    let mut rng = StdRng::seed_from_u64(8);

    let mut cases = vec![[0xffff_ffffu64; 16], [0u64; 16]];
    for _ in 0..1_000 {
        let mut limbs = [0u64; 16];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u32() as u64;
        }
        cases.push(limbs);
    }

    for limbs in cases {
        let wide = WideElement::from_limbs(limbs);
        let reduced = FieldElement::reduce(&wide);

        let digits: Vec<u32> = limbs.iter().map(|&l| l as u32).collect();
        assert_eq!(reduced.to_bytes(), canonical_bytes(&big_from_limbs(&digits)));

        // lazy output stays below 2^255 + 2^11
        let top = reduced.to_limbs()[7];
        assert!(top < 0x8000_0000 || (top == 0x8000_0000 && reduced.to_limbs()[0] < 0x800));
    }
}

#[test]
fn reduce_accepts_oversized_limbs() {
    // Out-of-contract input: the value is meaningless but nothing overflows.
    let wide = WideElement::from_limbs([u64::MAX; 16]);
    let reduced = FieldElement::reduce(&wide);

    assert_eq!(reduced.to_bytes().len(), 32);
    assert_eq!(reduced, FieldElement::reduce(&wide));
    assert_eq!(format!("{wide:?}"), "WideElement(..)");
}

/// Integer held by the raw limbs, before canonicalization.
fn lazy_value(x: &FieldElement) -> BigUint {
    big_from_limbs(&x.to_limbs())
}

#[test]
fn operator_outputs_stay_within_bounds() {
    let two_255 = BigUint::from(1u8) << 255usize;
    let tight = &two_255 + (1u32 << 11);
    let loose = &two_255 + (1u32 << 23);

    // 2^255 - 1, the largest decodable value
    let max = FieldElement::from_bytes(&[0xff; 32]);
    let scaled = max.mul121666();

    let inputs = [
        FieldElement::ZERO,
        FieldElement::ONE,
        FieldElement::P,
        max,
        scaled,
        max + max,
        scaled + scaled,
        FieldElement::ZERO - max,
        -scaled,
    ];

    let mut outputs = Vec::new();
    for a in inputs {
        outputs.push((a.square(), &tight));
        outputs.push((-a, &tight));
        outputs.push((a.mul121666(), &loose));

        for b in inputs {
            outputs.push((a + b, &tight));
            outputs.push((a - b, &tight));
            outputs.push((a * b, &tight));
        }
    }

    let mut above = 0;
    for (out, bound) in outputs {
        let value = lazy_value(&out);
        assert!(&value < bound);

        if value >= two_255 {
            above += 1;
            assert_eq!(out.to_bytes(), canonical_bytes(&value));
        }
    }
    assert!(above > 0);

    // (2^255 - 1) + (2^255 - 1) folds to 2^255 + 17
    assert_eq!(lazy_value(&(max + max)), &two_255 + 17u8);

    // mul121666 exceeds the tight bound but not the loose one
    let expected = (&two_255 - 1u8) * A24;
    assert_eq!(lazy_value(&scaled), &two_255 + 0x0021_6a91u32);
    assert_eq!(scaled.to_bytes(), canonical_bytes(&expected));
}

/// Backend that only knows how to multiply and relies on the default
/// `square_wide`.
struct MulOnly;

impl WideMultiplier for MulOnly {
    fn mul_wide(a: &[u32; 8], b: &[u32; 8]) -> WideElement {
        Portable::mul_wide(a, b)
    }
}

#[test]
fn alternate_backend_gives_same_results() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..256 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let a = FieldElement::from_bytes(&bytes);
        rng.fill_bytes(&mut bytes);
        let b = FieldElement::from_bytes(&bytes);

        assert_eq!(a.square_with::<MulOnly>().to_limbs(), a.square().to_limbs());
        assert_eq!(a.mul_with::<MulOnly>(&b).to_limbs(), (a * b).to_limbs());
    }
}
