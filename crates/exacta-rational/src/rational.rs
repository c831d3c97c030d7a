//! Exact rational numbers over an integer-like component type.
//!
//! Rationals are always stored in lowest terms with a positive
//! denominator; zero is `0/1`. Every constructing or mutating path
//! funnels through [`Rational::new`], which restores that form.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use thiserror::Error;

use crate::traits::IntegerLike;

/// The error returned when rational text fails to parse.
///
/// Accepted forms are `"N"`, `"N/D"`, and `"I N/D"`, with one optional
/// leading `+` or `-` applying to the whole value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid rational literal {input:?}")]
pub struct ParseRationalError {
    input: String,
}

/// An exact fraction in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational<T: IntegerLike> {
    num: T,
    den: T,
}

impl<T: IntegerLike> Rational<T> {
    /// Creates a rational from numerator and denominator, reducing to
    /// lowest terms and normalizing the denominator's sign.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: T, denominator: T) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let mut value = Self {
            num: numerator,
            den: denominator,
        };
        value.reduce();
        value
    }

    /// Creates a whole number (denominator 1).
    #[must_use]
    pub fn from_integer(value: T) -> Self {
        Self {
            num: value,
            den: T::one(),
        }
    }

    /// Creates a rational from mixed-number form.
    ///
    /// The fraction's magnitude is applied away from zero, matching the
    /// `"I N/D"` text form: `from_mixed(-2, 1, 4)` is -9/4.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_mixed(whole: T, numerator: T, denominator: T) -> Self {
        let frac = Self::new(numerator, denominator);
        let whole_part = Self::from_integer(whole.clone());
        if whole.is_negative() {
            &whole_part - &frac
        } else {
            &whole_part + &frac
        }
    }

    /// Restores lowest terms and a positive denominator.
    fn reduce(&mut self) {
        if self.den.is_negative() {
            self.num = -self.num.clone();
            self.den = -self.den.clone();
        }
        if self.num.is_zero() {
            self.den = T::one();
            return;
        }
        let g = self.num.gcd(&self.den);
        if !g.is_one() {
            self.num = self.num.div_rem_euclid(&g).0;
            self.den = self.den.div_rem_euclid(&g).0;
        }
    }

    /// Borrows the numerator.
    pub fn numerator(&self) -> &T {
        &self.num
    }

    /// Borrows the denominator; always positive.
    pub fn denominator(&self) -> &T {
        &self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.num.is_zero() {
            0
        } else if self.num.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.num.is_zero(), "cannot take reciprocal of zero");
        Self::new(self.den.clone(), self.num.clone())
    }

    /// The integer part, rounded toward negative infinity.
    ///
    /// `whole() + fraction()` always reassembles the value, with
    /// `fraction()` non-negative: for -9/4, `whole()` is -3 and
    /// `fraction()` is 3/4.
    #[must_use]
    pub fn whole(&self) -> T {
        self.num.div_rem_euclid(&self.den).0
    }

    /// The non-negative fractional part complementing [`whole`](Self::whole).
    #[must_use]
    pub fn fraction(&self) -> Self {
        Self::new(self.num.div_rem_euclid(&self.den).1, self.den.clone())
    }

    /// The integer part, rounded toward zero: -2 for -9/4.
    #[must_use]
    pub fn truncate(&self) -> T {
        let (q, r) = self.num.div_rem_euclid(&self.den);
        if self.num.is_negative() && !r.is_zero() {
            q + T::one()
        } else {
            q
        }
    }

    /// The fractional part carrying the value's sign, complementing
    /// [`truncate`](Self::truncate): -1/4 for -9/4.
    #[must_use]
    pub fn signed_fraction(&self) -> Self {
        let whole = self.truncate();
        Self::new(self.num.clone() - whole * self.den.clone(), self.den.clone())
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.num.to_f64() / self.den.to_f64()
    }

    /// Renders as a mixed number: `"0"`, `"I"`, `"N/D"`, or `"I N/D"`.
    #[must_use]
    pub fn mixed(&self) -> String {
        let whole = self.truncate();
        let frac = self.signed_fraction();
        if frac.num.is_zero() {
            return whole.to_string();
        }
        if whole.is_zero() {
            return self.to_string();
        }
        format!("{} {}/{}", whole, frac.num.abs(), frac.den)
    }

    /// Parses `"N"`, `"N/D"`, or `"I N/D"`, with one optional leading
    /// `+`/`-` applying to the whole value and `_`/`'` separators
    /// permitted inside components.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRationalError`] on anything else: a missing
    /// component, a zero denominator, stray characters, `"I N"` with no
    /// slash, or extra separators.
    pub fn parse(src: &str) -> Result<Self, ParseRationalError> {
        let fail = || ParseRationalError {
            input: src.to_string(),
        };
        let (negative, body) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src.strip_prefix('+').unwrap_or(src)),
        };
        let value = if let Some((whole, frac)) = body.split_once(' ') {
            let (num, den) = frac.split_once('/').ok_or_else(fail)?;
            let whole: T = component(whole).ok_or_else(fail)?;
            let num = component(num).ok_or_else(fail)?;
            let den: T = component(den).ok_or_else(fail)?;
            if den.is_zero() {
                return Err(fail());
            }
            Self::from_integer(whole) + Self::new(num, den)
        } else if let Some((num, den)) = body.split_once('/') {
            let num = component(num).ok_or_else(fail)?;
            let den: T = component(den).ok_or_else(fail)?;
            if den.is_zero() {
                return Err(fail());
            }
            Self::new(num, den)
        } else {
            Self::from_integer(component(body).ok_or_else(fail)?)
        };
        Ok(if negative { -value } else { value })
    }
}

/// Parses one unsigned component of a rational literal.
fn component<T: IntegerLike>(part: &str) -> Option<T> {
    let mut digits = String::with_capacity(part.len());
    for ch in part.chars() {
        if ch == '\'' || ch == '_' {
            continue;
        }
        if !ch.is_ascii_digit() {
            return None;
        }
        digits.push(ch);
    }
    if digits.is_empty() {
        return None;
    }
    T::parse_decimal(&digits)
}

impl<T: IntegerLike> Default for Rational<T> {
    fn default() -> Self {
        Self::from_integer(T::zero())
    }
}

impl<T: IntegerLike> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: IntegerLike> FromStr for Rational<T> {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: IntegerLike> Zero for Rational<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl<T: IntegerLike> One for Rational<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl<T: IntegerLike> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves
        // the ordering.
        (self.num.clone() * other.den.clone()).cmp(&(other.num.clone() * self.den.clone()))
    }
}

impl<T: IntegerLike> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: IntegerLike> Neg for &Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        Rational {
            num: -self.num.clone(),
            den: self.den.clone(),
        }
    }
}

impl<T: IntegerLike> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<T: IntegerLike> Add for &Rational<T> {
    type Output = Rational<T>;

    fn add(self, rhs: Self) -> Rational<T> {
        let common = self.den.lcm(&rhs.den);
        let left = self.num.clone() * common.div_rem_euclid(&self.den).0;
        let right = rhs.num.clone() * common.div_rem_euclid(&rhs.den).0;
        Rational::new(left + right, common)
    }
}

impl<T: IntegerLike> Sub for &Rational<T> {
    type Output = Rational<T>;

    fn sub(self, rhs: Self) -> Rational<T> {
        self + &-rhs
    }
}

impl<T: IntegerLike> Mul for &Rational<T> {
    type Output = Rational<T>;

    fn mul(self, rhs: Self) -> Rational<T> {
        Rational::new(
            self.num.clone() * rhs.num.clone(),
            self.den.clone() * rhs.den.clone(),
        )
    }
}

impl<T: IntegerLike> Div for &Rational<T> {
    type Output = Rational<T>;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Rational<T> {
        assert!(!rhs.num.is_zero(), "division by zero");
        Rational::new(
            self.num.clone() * rhs.den.clone(),
            self.den.clone() * rhs.num.clone(),
        )
    }
}

// Forwards the owned operand combinations of a binary operator to the
// `&T op &T` implementation.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl<T: IntegerLike> std::ops::$imp for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<T: IntegerLike> std::ops::$imp<&Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: &Rational<T>) -> Rational<T> {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl<T: IntegerLike> std::ops::$imp<Rational<T>> for &Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Rational<T> {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);

impl<T: IntegerLike> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl<T: IntegerLike> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}
