//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use exacta_integers::Integer;

    use crate::{BigRational, IntegerLike, Rational};

    // Small ranges keep the i64 cross-multiplications far from overflow.
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational<i64>> {
        (small_int(), non_zero_int()).prop_map(|(num, den)| Rational::new(num, den))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational<i64>> {
        rational().prop_filter("non-zero", |r| !r.is_zero())
    }

    fn big_rational() -> impl Strategy<Value = BigRational> {
        (small_int(), non_zero_int())
            .prop_map(|(num, den)| BigRational::new(Integer::new(num), Integer::new(den)))
    }

    proptest! {
        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn add_sub_round_trip(a in rational(), b in rational()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn mul_div_round_trip(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((&a * &b) / &b, a);
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            prop_assert!((&a * &a.recip()).is_one());
        }

        // Canonical form

        #[test]
        fn reduced_to_lowest_terms(a in rational()) {
            prop_assert!(*a.denominator() > 0);
            prop_assert_eq!(a.numerator().gcd(a.denominator()), 1);
        }

        #[test]
        fn negated_pair_is_equal(num in small_int(), den in non_zero_int()) {
            prop_assert_eq!(Rational::new(num, den), Rational::new(-num, -den));
        }

        // Decomposition

        #[test]
        fn whole_plus_fraction(a in rational()) {
            let reassembled = Rational::from_integer(a.whole()) + a.fraction();
            prop_assert_eq!(reassembled, a.clone());
            prop_assert!(!a.fraction().is_negative());
        }

        #[test]
        fn truncate_plus_signed_fraction(a in rational()) {
            let reassembled = Rational::from_integer(a.truncate()) + a.signed_fraction();
            prop_assert_eq!(reassembled, a.clone());
            prop_assert!(a.signed_fraction().signum() * a.signum() >= 0);
        }

        // Text round trips

        #[test]
        fn str_round_trip(a in rational()) {
            let s = a.to_string();
            prop_assert_eq!(Rational::<i64>::parse(&s).unwrap(), a);
        }

        #[test]
        fn mixed_round_trip(a in rational()) {
            let s = a.mixed();
            prop_assert_eq!(Rational::<i64>::parse(&s).unwrap(), a);
        }

        // Ordering agrees with f64 for comfortably-sized values

        #[test]
        fn ordering_matches_f64(a in rational(), b in rational()) {
            if a != b {
                prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
            }
        }

        // The big-integer instantiation behaves like the primitive one

        #[test]
        fn big_matches_small(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let small = Rational::new(num_a, den_a) + Rational::new(num_b, den_b);
            let big = BigRational::new(Integer::new(num_a), Integer::new(den_a))
                + BigRational::new(Integer::new(num_b), Integer::new(den_b));
            prop_assert_eq!(big.numerator().to_i64(), Some(*small.numerator()));
            prop_assert_eq!(big.denominator().to_i64(), Some(*small.denominator()));
        }

        #[test]
        fn big_mul_div_round_trip(a in big_rational(), b in big_rational()) {
            if !b.is_zero() {
                prop_assert_eq!((&a * &b) / &b, a);
            }
        }
    }
}
