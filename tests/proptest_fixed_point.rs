use proptest::prelude::*;
use q_fixed::{saturate, Q, Q1d30, Q5d26};

type Q27 = Q<27>;

// Property 1: Addition is commutative (a + b == b + a)
proptest! {
    #[test]
    fn prop_addition_commutative(a in any::<i32>(), b in any::<i32>()) {
        let a = Q5d26::from_raw(a);
        let b = Q5d26::from_raw(b);

        prop_assert_eq!(a + b, b + a);
    }
}

// Property 2: Subtraction is the inverse of addition, even across wraparound
proptest! {
    #[test]
    fn prop_subtraction_inverse_of_addition(a in any::<i32>(), b in any::<i32>()) {
        let qa = Q1d30::from_raw(a);
        let qb = Q1d30::from_raw(b);

        prop_assert_eq!((qa + qb) - qb, qa);
        prop_assert_eq!((qa + qb).into_raw(), a.wrapping_add(b));
    }
}

// Property 3: Saturating multiplication equals the clamped exact product
proptest! {
    #[test]
    fn prop_saturating_mul_clamps_exact_product(a in any::<i32>(), b in any::<i32>()) {
        let exact = ((a as i64) * (b as i64)) >> 26;
        let expected = exact.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        let product = Q5d26::from_raw(a) * Q5d26::from_raw(b);

        prop_assert_eq!(product.into_raw(), expected);
        prop_assert!(product >= Q5d26::MIN_VAL && product <= Q5d26::MAX_VAL);
    }
}

// Property 4: Wrapping multiplication keeps the low bits of the exact product
proptest! {
    #[test]
    fn prop_wrapping_mul_truncates_exact_product(a in any::<i32>(), b in any::<i32>()) {
        let exact = ((a as i64) * (b as i64)) >> 30;

        let product = Q1d30::from_raw(a).wrapping_mul(Q1d30::from_raw(b));

        prop_assert_eq!(product.into_raw(), exact as i32);
    }
}

// Property 5: Both policies agree whenever the product fits
proptest! {
    #[test]
    fn prop_policies_agree_in_range(a in any::<i16>(), b in any::<i16>()) {
        let a = Q::<12, i16>::from_raw(a);
        let b = Q::<12, i16>::from_raw(b);

        match a.checked_mul(b) {
            Some(product) => {
                prop_assert_eq!(a.saturating_mul(b), product);
                prop_assert_eq!(a.wrapping_mul(b), product);
            }
            None => {
                let saturated = a.saturating_mul(b);
                prop_assert!(saturated == Q::<12, i16>::MAX_VAL || saturated == Q::<12, i16>::MIN_VAL);
            }
        }
    }
}

// Property 6: The 64-bit register multiplies through i128
proptest! {
    #[test]
    fn prop_i64_saturating_mul(a in any::<i64>(), b in any::<i64>()) {
        let exact = ((a as i128) * (b as i128)) >> 40;
        let expected = exact.clamp(i64::MIN as i128, i64::MAX as i128) as i64;

        let product = Q::<40, i64>::from_raw(a) * Q::<40, i64>::from_raw(b);

        prop_assert_eq!(product.into_raw(), expected);
        prop_assert_eq!(
            Q::<40, i64>::from_raw(a).wrapping_mul(Q::<40, i64>::from_raw(b)).into_raw(),
            exact as i64
        );
    }
}

// Property 7: Raw construction is equal only for identical bit patterns
proptest! {
    #[test]
    fn prop_raw_equality_is_bit_equality(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Q5d26::from_raw(a) == Q5d26::from_raw(b), a == b);
        prop_assert_eq!(Q5d26::from_raw(a), Q5d26::from_raw(a));
    }
}

// Property 8: from_int keeps n mod 2^INTEGER_BITS, with the sign of n
proptest! {
    #[test]
    fn prop_from_int_then_int_part(n in any::<i32>()) {
        let kept = n & 0b1111;
        let expected = if n < 0 { -kept } else { kept };

        prop_assert_eq!(Q27::from_int(n).int_part(), expected);
    }
}

// Property 9: try_from_int round-trips every in-range integer exactly
proptest! {
    #[test]
    fn prop_try_from_int_round_trip(n in -32i32..=31) {
        let q = Q5d26::try_from_int(n).unwrap();

        prop_assert_eq!(q.int_part(), n);
        prop_assert_eq!(q.into_raw(), n << 26);
    }
}

// Property 10: saturate never leaves the target range and is the identity inside it
proptest! {
    #[test]
    fn prop_saturate_i32(wide in any::<i64>()) {
        let narrowed = saturate::<i32>(wide);

        if wide > i32::MAX as i64 {
            prop_assert_eq!(narrowed, i32::MAX);
        } else if wide < i32::MIN as i64 {
            prop_assert_eq!(narrowed, i32::MIN);
        } else {
            prop_assert_eq!(narrowed as i64, wide);
        }
    }
}

// Property 11: Byte images round-trip through read_le at any offset
proptest! {
    #[test]
    fn prop_read_le_round_trip(raw in any::<i32>(), offset in 0usize..8) {
        let mut buf = vec![0u8; offset];
        buf.extend_from_slice(&Q1d30::from_raw(raw).to_le_bytes());

        prop_assert_eq!(Q1d30::read_le(&buf, offset), Ok(Q1d30::from_raw(raw)));
    }
}
