//! The integer capability bound for [`Rational`](crate::Rational).

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

use exacta_integers::Integer;
use num_traits::{One, Zero};

/// An integer-like type usable as the component type of a rational.
///
/// # Laws
///
/// - `div_rem_euclid(a, b)` returns `(q, r)` with `a == b*q + r` and
///   `0 <= r < |b|` (the remainder is never negative)
/// - `gcd` is non-negative and divides both operands
pub trait IntegerLike:
    Clone
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Converts a small literal.
    fn from_i32(value: i32) -> Self;

    /// Returns true if the value is strictly negative.
    fn is_negative(&self) -> bool;

    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Euclidean division: the remainder is always non-negative.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn div_rem_euclid(&self, other: &Self) -> (Self, Self);

    /// Converts to the nearest `f64`.
    fn to_f64(&self) -> f64;

    /// Parses an unsigned decimal digit run.
    fn parse_decimal(digits: &str) -> Option<Self>;

    /// Computes the greatest common divisor.
    #[must_use]
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let (_, r) = a.div_rem_euclid(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Computes the least common multiple; non-negative.
    #[must_use]
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        (self.div_rem_euclid(&g).0 * other.clone()).abs()
    }
}

macro_rules! impl_integer_like {
    ($($t:ty),*) => {$(
        impl IntegerLike for $t {
            fn from_i32(value: i32) -> Self {
                value as $t
            }

            fn is_negative(&self) -> bool {
                *self < 0
            }

            fn abs(&self) -> Self {
                <$t>::abs(*self)
            }

            fn div_rem_euclid(&self, other: &Self) -> (Self, Self) {
                (self.div_euclid(*other), self.rem_euclid(*other))
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn parse_decimal(digits: &str) -> Option<Self> {
                digits.parse().ok()
            }
        }
    )*};
}

impl_integer_like!(i16, i32, i64, i128, isize);

impl IntegerLike for Integer {
    fn from_i32(value: i32) -> Self {
        Integer::new(i64::from(value))
    }

    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }

    fn abs(&self) -> Self {
        Integer::abs(self)
    }

    fn div_rem_euclid(&self, other: &Self) -> (Self, Self) {
        self.div_rem(other)
    }

    fn to_f64(&self) -> f64 {
        Integer::to_f64(self)
    }

    fn parse_decimal(digits: &str) -> Option<Self> {
        Integer::from_str_radix(digits, 10).ok()
    }

    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    fn lcm(&self, other: &Self) -> Self {
        Integer::lcm(self, other)
    }
}
