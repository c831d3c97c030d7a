//! Signed arbitrary precision integers.
//!
//! An [`Integer`] is a [`Natural`] magnitude plus a sign flag. All
//! arithmetic delegates the magnitude work to `Natural` and fixes up
//! the sign. Zero is canonical: its sign flag is always false, so the
//! derived equality and hashing are sound.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::ParseError;
use crate::natural::Natural;

/// A signed arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    magnitude: Natural,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Normalizing constructor: zero never keeps a negative sign.
    fn from_sign_magnitude(negative: bool, magnitude: Natural) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Parses a string in the given base, with an optional leading
    /// `+` or `-` ahead of the digits.
    ///
    /// Base handling is exactly [`Natural::from_str_radix`]: 2..=36,
    /// or 0 for `0x`/`0b` autodetection with a decimal fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the digits fail to parse.
    pub fn from_str_radix(src: &str, base: u32) -> Result<Self, ParseError> {
        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src.strip_prefix('+').unwrap_or(src)),
        };
        let magnitude = Natural::from_str_radix(digits, base)?;
        Ok(Self::from_sign_magnitude(negative, magnitude))
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.magnitude.is_zero() {
            0
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Returns the magnitude as an unsigned value.
    #[must_use]
    pub fn unsigned_abs(&self) -> Natural {
        self.magnitude.clone()
    }

    /// Borrows the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// Number of significant bits of the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.magnitude.bit_len()
    }

    /// Division with remainder; the remainder is always non-negative.
    ///
    /// This is Euclidean division: `self == rhs * quot + rem` with
    /// `0 <= rem < |rhs|`, so `-5 / 3` is `-2` remainder `1`, and
    /// `5 / -3` is `-1` remainder `2`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        let (mut quot, mut rem) = self.magnitude.div_rem(&rhs.magnitude);
        if self.negative && !rem.is_zero() {
            quot += &Natural::one();
            rem = &rhs.magnitude - &rem;
        }
        (
            Self::from_sign_magnitude(self.negative != rhs.negative, quot),
            Self::from(rem),
        )
    }

    /// Computes the greatest common divisor of the magnitudes.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.magnitude.clone();
        let mut b = other.magnitude.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        Self::from(a)
    }

    /// Computes the least common multiple; non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.magnitude.is_zero() || other.magnitude.is_zero() {
            return Self::default();
        }
        let g = self.gcd(other);
        Self::from(&(&self.magnitude / &g.magnitude) * &other.magnitude)
    }

    /// Raises the value to a power by binary exponentiation.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self::from_sign_magnitude(self.negative && exp % 2 == 1, self.magnitude.pow(exp))
    }

    /// Converts to an i64 if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = i128::from(self.magnitude.to_u64()?);
        let wide = if self.negative { -magnitude } else { magnitude };
        i64::try_from(wide).ok()
    }

    /// Converts to an i128 if the value fits.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude.to_u128()?;
        if self.negative {
            // -2^127 is representable even though 2^127 is not.
            if magnitude > 1u128 << 127 {
                return None;
            }
            Some((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    /// Converts to a u64 if the value is non-negative and fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            None
        } else {
            self.magnitude.to_u64()
        }
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                // unsigned_abs absorbs the two's-complement MIN case.
                Self::from_sign_magnitude(value < 0, Natural::from(value.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self {
                    negative: false,
                    magnitude: Natural::from(value),
                }
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<Natural> for Integer {
    fn from(value: Natural) -> Self {
        Self {
            negative: false,
            magnitude: value,
        }
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 0)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from(1u32)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude.is_one()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            // Between negatives the larger magnitude is the smaller value.
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer::from_sign_magnitude(!self.negative, self.magnitude.clone())
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer::from_sign_magnitude(!self.negative, self.magnitude)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        if self.negative == rhs.negative {
            Integer::from_sign_magnitude(self.negative, &self.magnitude + &rhs.magnitude)
        } else {
            match self.magnitude.cmp(&rhs.magnitude) {
                Ordering::Greater => {
                    Integer::from_sign_magnitude(self.negative, &self.magnitude - &rhs.magnitude)
                }
                Ordering::Less => {
                    Integer::from_sign_magnitude(rhs.negative, &rhs.magnitude - &self.magnitude)
                }
                Ordering::Equal => Integer::default(),
            }
        }
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        self + &-rhs
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        Integer::from_sign_magnitude(
            self.negative != rhs.negative,
            &self.magnitude * &rhs.magnitude,
        )
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: &Integer) -> Integer {
        self.div_rem(rhs).0
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        self.div_rem(rhs).1
    }
}

forward_binop!(impl Add, add for Integer);
forward_binop!(impl Sub, sub for Integer);
forward_binop!(impl Mul, mul for Integer);
forward_binop!(impl Div, div for Integer);
forward_binop!(impl Rem, rem for Integer);

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        *self = &*self * &rhs;
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_str_radix(10))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude.to_str_radix(16))
    }
}
