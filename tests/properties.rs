use fe25519::FieldElement;

use proptest::prelude::*;

fn fe(bytes: &[u8; 32]) -> FieldElement {
    FieldElement::from_bytes(bytes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn mul_distributes_over_add(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
        c in any::<[u8; 32]>(),
    ) {
        let (a, b, c) = (fe(&a), fe(&b), fe(&c));

        prop_assert_eq!((a * (b + c)).to_bytes(), (a * b + a * c).to_bytes());
    }

    #[test]
    fn square_equals_self_mul(a in any::<[u8; 32]>()) {
        let a = fe(&a);

        prop_assert_eq!(a.square().to_bytes(), (a * a).to_bytes());
    }

    #[test]
    fn add_neg_encodes_zero(a in any::<[u8; 32]>()) {
        let a = fe(&a);

        prop_assert_eq!((a + (-a)).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn sub_undoes_add(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (fe(&a), fe(&b));

        prop_assert_eq!(((a + b) - b).to_bytes(), a.to_bytes());
    }

    #[test]
    fn mul_commutes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (fe(&a), fe(&b));

        prop_assert_eq!((a * b).to_bytes(), (b * a).to_bytes());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invert_is_multiplicative_inverse(a in any::<[u8; 32]>()) {
        let a = fe(&a);
        let expected = if bool::from(a.is_zero()) {
            FieldElement::ZERO
        } else {
            FieldElement::ONE
        };

        prop_assert_eq!((a * a.invert()).to_bytes(), expected.to_bytes());
    }

    #[test]
    fn round_trip_through_canonical_form(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        // any lazy value, here a product
        let lazy = fe(&a) * fe(&b);
        let encoded = lazy.to_bytes();
        let canonical = fe(&encoded);

        prop_assert_eq!(fe(&encoded).to_bytes(), fe(&canonical.to_bytes()).to_bytes());
        prop_assert_eq!(canonical.to_limbs(), fe(&encoded).to_limbs());
    }

    #[test]
    fn top_bit_is_ignored(a in any::<[u8; 32]>()) {
        let mut high = a;
        high[31] |= 0x80;
        let mut low = a;
        low[31] &= 0x7f;

        prop_assert_eq!(fe(&high).to_limbs(), fe(&low).to_limbs());
    }

    #[test]
    fn is_negative_is_low_bit(a in any::<[u8; 32]>()) {
        let a = fe(&a);

        prop_assert_eq!(a.is_negative().unwrap_u8(), a.to_bytes()[0] & 1);
    }
}
