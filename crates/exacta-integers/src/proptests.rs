//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Natural};

    // Strategy for naturals up to 256 bits.
    fn natural() -> impl Strategy<Value = Natural> {
        (any::<u128>(), any::<u128>())
            .prop_map(|(hi, lo)| (Natural::from(hi) << 128) + Natural::from(lo))
    }

    // Strategy for non-zero naturals.
    fn non_zero_natural() -> impl Strategy<Value = Natural> {
        natural().prop_filter("non-zero", |n| !n.is_zero())
    }

    // Strategy for signed values built from a magnitude and a sign.
    fn integer() -> impl Strategy<Value = Integer> {
        (natural(), any::<bool>()).prop_map(|(mag, neg)| {
            let value = Integer::from(mag);
            if neg {
                -value
            } else {
                value
            }
        })
    }

    fn non_zero_integer() -> impl Strategy<Value = Integer> {
        integer().prop_filter("non-zero", |n| !n.is_zero())
    }

    proptest! {
        // Natural ring behavior

        #[test]
        fn natural_add_commutative(a in natural(), b in natural()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn natural_add_associative(a in natural(), b in natural(), c in natural()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn natural_mul_commutative(a in natural(), b in natural()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn natural_distributive(a in natural(), b in natural(), c in natural()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        // Subtraction: exact when it stays non-negative, clamped below.

        #[test]
        fn natural_add_sub_round_trip(a in natural(), b in natural()) {
            prop_assert_eq!((&a + &b) - &a, b);
        }

        #[test]
        fn natural_sub_saturates(a in natural(), b in natural()) {
            if a <= b {
                prop_assert!((&a - &b).is_zero());
            } else {
                prop_assert_eq!((&a - &b) + &b, a);
            }
        }

        // Division

        #[test]
        fn natural_div_rem_identity(a in natural(), b in non_zero_natural()) {
            let (q, r) = a.div_rem(&b);
            prop_assert!(r < b);
            prop_assert_eq!(&b * &q + &r, a);
        }

        // String round trips

        #[test]
        fn natural_str_round_trip_decimal(a in natural()) {
            let s = a.to_str_radix(10);
            prop_assert_eq!(Natural::from_str_radix(&s, 10).unwrap(), a);
        }

        #[test]
        fn natural_str_round_trip_hex(a in natural()) {
            let s = a.to_str_radix(16);
            prop_assert_eq!(Natural::from_str_radix(&s, 16).unwrap(), a);
        }

        #[test]
        fn natural_str_round_trip_binary(a in natural()) {
            let s = a.to_str_radix(2);
            prop_assert_eq!(Natural::from_str_radix(&s, 2).unwrap(), a);
        }

        // Bits and shifts

        #[test]
        fn natural_shift_round_trip(a in natural(), shift in 0usize..300) {
            prop_assert_eq!((&a << shift) >> shift, a);
        }

        #[test]
        fn natural_shift_is_mul_by_power(a in natural(), shift in 0usize..200) {
            let pow = Natural::from(2u32).pow(u32::try_from(shift).unwrap());
            prop_assert_eq!(&a << shift, &a * &pow);
        }

        #[test]
        fn natural_xor_self_is_zero(a in natural()) {
            prop_assert!((&a ^ &a).is_zero());
        }

        #[test]
        fn natural_set_bit_reads_back(a in natural(), index in 0usize..512) {
            let mut b = a;
            b.set_bit(index, true);
            prop_assert!(b.bit(index));
            b.set_bit(index, false);
            prop_assert!(!b.bit(index));
        }

        #[test]
        fn natural_count_ones_splits_over_or(a in natural(), b in natural()) {
            let both = (&a & &b).count_ones();
            let either = (&a | &b).count_ones();
            prop_assert_eq!(a.count_ones() + b.count_ones(), either + both);
        }

        #[test]
        fn natural_bit_len_bounds_value(a in non_zero_natural()) {
            let bits = a.bit_len();
            prop_assert!(Natural::from(1u32) << (bits - 1) <= a);
            prop_assert!(a < Natural::from(1u32) << bits);
        }

        // Integer ring behavior

        #[test]
        fn integer_add_commutative(a in integer(), b in integer()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in integer(), b in integer(), c in integer()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn integer_additive_inverse(a in integer()) {
            prop_assert!((&a + &-&a).is_zero());
        }

        #[test]
        fn integer_sub_is_add_neg(a in integer(), b in integer()) {
            prop_assert_eq!(&a - &b, &a + &-&b);
        }

        #[test]
        fn integer_distributive(a in integer(), b in integer(), c in integer()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_mul_sign(a in non_zero_integer(), b in non_zero_integer()) {
            let product = &a * &b;
            prop_assert_eq!(
                product.is_negative(),
                a.is_negative() != b.is_negative()
            );
        }

        // Euclidean division: remainder is non-negative and small.

        #[test]
        fn integer_div_rem_identity(a in integer(), b in non_zero_integer()) {
            let (q, r) = a.div_rem(&b);
            prop_assert!(!r.is_negative());
            prop_assert!(r < b.abs());
            prop_assert_eq!(&b * &q + &r, a);
        }

        #[test]
        fn integer_str_round_trip(a in integer()) {
            let s = a.to_string();
            prop_assert_eq!(s.parse::<Integer>().unwrap(), a);
        }

        #[test]
        fn integer_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            let big_a = Integer::from(a);
            let big_b = Integer::from(b);
            prop_assert_eq!((&big_a + &big_b).to_i128(), Some(i128::from(a) + i128::from(b)));
            prop_assert_eq!((&big_a * &big_b).to_i128(), Some(i128::from(a) * i128::from(b)));
            prop_assert_eq!(big_a.cmp(&big_b), a.cmp(&b));
        }

        // GCD

        #[test]
        fn gcd_divides_both(a in non_zero_integer(), b in non_zero_integer()) {
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in integer(), b in integer()) {
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }
    }
}
