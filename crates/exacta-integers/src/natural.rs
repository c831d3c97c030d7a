//! Unsigned arbitrary precision integers.
//!
//! A [`Natural`] stores its magnitude as a sequence of 32-bit digits in
//! base 2^32, least significant first. The digit vector never carries
//! leading (most significant) zero digits; every mutating operation
//! restores this invariant, so equality and length-first ordering can
//! work directly on the digit sequence.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::error::ParseError;

const WORD_BITS: usize = 32;

/// Digit storage. Four inline words cover everything up to 2^128.
type Digits = SmallVec<[u32; 4]>;

/// An unsigned arbitrary precision integer.
///
/// `Natural` is a plain value type: freely cloned, no shared state.
/// Subtraction saturates at zero rather than wrapping or failing.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Natural {
    digits: Digits,
}

impl Natural {
    /// Builds a value from 64-bit chunks given most significant first.
    ///
    /// `from_be_chunks(&[hi, lo])` equals `hi * 2^64 + lo`.
    #[must_use]
    pub fn from_be_chunks(chunks: &[u64]) -> Self {
        let mut value = Self::default();
        for &chunk in chunks {
            value <<= 64;
            value += Self::from(chunk);
        }
        value
    }

    /// Parses a string in the given base.
    ///
    /// Base must be in `2..=36`; base 0 autodetects a `0x`/`0X` or
    /// `0b`/`0B` prefix and otherwise reads decimal. Letters `a-z`
    /// (either case) are digits ten and up. `'` and `_` are accepted
    /// anywhere as digit separators and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on an unsupported base, a digit out of
    /// range for the base, or input with no digits at all.
    pub fn from_str_radix(src: &str, base: u32) -> Result<Self, ParseError> {
        let (digits, base) = match base {
            0 => {
                if let Some(rest) = src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
                    (rest, 16)
                } else if let Some(rest) = src.strip_prefix("0b").or_else(|| src.strip_prefix("0B"))
                {
                    (rest, 2)
                } else {
                    (src, 10)
                }
            }
            2..=36 => (src, base),
            _ => return Err(ParseError::UnsupportedBase(base)),
        };

        let mut value = Self::default();
        let mut seen_digit = false;
        for ch in digits.chars() {
            if ch == '\'' || ch == '_' {
                continue;
            }
            let digit = ch
                .to_digit(36)
                .filter(|&d| d < base)
                .ok_or(ParseError::InvalidDigit { digit: ch, base })?;
            value.mul_digit(base);
            value.add_digit(digit);
            seen_digit = true;
        }
        if seen_digit {
            Ok(value)
        } else {
            Err(ParseError::Empty)
        }
    }

    /// Renders the value in the given base, lowercase digits.
    ///
    /// For zero-padding and `0x`-style prefixes use the formatting
    /// traits (`{:08x}` etc.) instead.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=36`.
    #[must_use]
    pub fn to_str_radix(&self, base: u32) -> String {
        assert!((2..=36).contains(&base), "base must be in 2..=36");
        if self.digits.is_empty() {
            return "0".to_string();
        }
        let mut out = Vec::new();
        if base.is_power_of_two() {
            // Mask and shift instead of dividing.
            let step = base.trailing_zeros() as usize;
            let mask = u64::from(base - 1);
            let mut n = self.clone();
            while !n.digits.is_empty() {
                out.push(digit_char((n.low_u64() & mask) as u32));
                n >>= step;
            }
        } else {
            let mut n = self.clone();
            while !n.digits.is_empty() {
                let (quot, rem) = n.div_rem_digit(base);
                out.push(digit_char(rem));
                n = quot;
            }
        }
        out.reverse();
        out.into_iter().collect()
    }

    /// Division with remainder.
    ///
    /// Single-word-sized operands divide natively; anything larger goes
    /// through binary long division (align the divisor by left shift,
    /// then test-subtract while shifting back down).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.digits.is_empty(), "division by zero");
        if self < rhs {
            return (Self::default(), self.clone());
        }
        if self.digits.len() <= 2 {
            // rhs <= self here, so both fit in a u64.
            let (a, b) = (self.low_u64(), rhs.low_u64());
            return (Self::from(a / b), Self::from(a % b));
        }

        let mut shift = self.bit_len() - rhs.bit_len();
        let mut den = rhs << shift;
        if den > *self {
            den >>= 1;
            shift -= 1;
        }
        let mut rem = self.clone();
        let mut quot = Self::default();
        loop {
            if den <= rem {
                rem -= &den;
                quot.set_bit(shift, true);
            }
            if shift == 0 {
                break;
            }
            den >>= 1;
            shift -= 1;
        }
        (quot, rem)
    }

    /// Raises the value to a power by binary exponentiation.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::from(1u32);
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        result
    }

    /// Number of significant bits; zero for zero.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(&top) => {
                (self.digits.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
            }
        }
    }

    /// Reads the bit at `index`. Bits beyond the top digit read as false.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        self.digits.get(word).is_some_and(|&d| d >> bit & 1 == 1)
    }

    /// Writes the bit at `index`, growing the digit vector as needed.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        if value {
            if word >= self.digits.len() {
                self.digits.resize(word + 1, 0);
            }
            self.digits[word] |= 1 << bit;
        } else if word < self.digits.len() {
            self.digits[word] &= !(1 << bit);
            self.trim();
        }
    }

    /// Inverts the bit at `index`, growing the digit vector as needed.
    pub fn flip_bit(&mut self, index: usize) {
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        if word >= self.digits.len() {
            self.digits.resize(word + 1, 0);
        }
        self.digits[word] ^= 1 << bit;
        self.trim();
    }

    /// Number of one bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.digits.iter().map(|d| d.count_ones() as usize).sum()
    }

    /// Converts to a `u32` if the value fits.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        if self.digits.len() <= 1 {
            Some(self.digits.first().copied().unwrap_or(0))
        } else {
            None
        }
    }

    /// Converts to a `u64` if the value fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.digits.len() <= 2 {
            Some(self.low_u64())
        } else {
            None
        }
    }

    /// Converts to a `u128` if the value fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.digits.len() > 4 {
            return None;
        }
        let mut value = 0u128;
        for &digit in self.digits.iter().rev() {
            value = value << 32 | u128::from(digit);
        }
        Some(value)
    }

    /// Converts to the nearest `f64`.
    ///
    /// Values wider than 64 bits keep their top 64 significant bits and
    /// scale by the dropped exponent, so precision matches a direct
    /// conversion without overflowing intermediate integers.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_len();
        if bits <= 64 {
            return self.low_u64() as f64;
        }
        let shift = bits - 64;
        (self >> shift).low_u64() as f64 * (shift as f64).exp2()
    }

    /// Low 64 bits of the magnitude. Exact whenever `digits.len() <= 2`.
    fn low_u64(&self) -> u64 {
        let lo = self.digits.first().copied().unwrap_or(0);
        let hi = self.digits.get(1).copied().unwrap_or(0);
        u64::from(hi) << 32 | u64::from(lo)
    }

    /// Drops leading zero digits.
    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// In-place multiply by a single digit.
    fn mul_digit(&mut self, rhs: u32) {
        let mut carry = 0u64;
        for digit in &mut self.digits {
            let t = u64::from(*digit) * u64::from(rhs) + carry;
            *digit = t as u32;
            carry = t >> 32;
        }
        if carry != 0 {
            self.digits.push(carry as u32);
        }
        self.trim();
    }

    /// In-place add of a single digit.
    fn add_digit(&mut self, rhs: u32) {
        let mut carry = u64::from(rhs);
        for digit in &mut self.digits {
            if carry == 0 {
                return;
            }
            let t = u64::from(*digit) + carry;
            *digit = t as u32;
            carry = t >> 32;
        }
        if carry != 0 {
            self.digits.push(carry as u32);
        }
    }

    /// Division by a single digit, returning quotient and remainder.
    fn div_rem_digit(&self, rhs: u32) -> (Self, u32) {
        let mut quot: Digits = smallvec![0; self.digits.len()];
        let mut rem = 0u64;
        for i in (0..self.digits.len()).rev() {
            let cur = rem << 32 | u64::from(self.digits[i]);
            quot[i] = (cur / u64::from(rhs)) as u32;
            rem = cur % u64::from(rhs);
        }
        let mut quot = Self { digits: quot };
        quot.trim();
        (quot, rem as u32)
    }
}

fn digit_char(digit: u32) -> char {
    if digit < 10 {
        char::from(b'0' + digit as u8)
    } else {
        char::from(b'a' + (digit - 10) as u8)
    }
}

// Construction from built-in unsigned integers. Small values pack into
// one digit, wider types split across digits.

impl From<u8> for Natural {
    fn from(value: u8) -> Self {
        Self::from(u32::from(value))
    }
}

impl From<u16> for Natural {
    fn from(value: u16) -> Self {
        Self::from(u32::from(value))
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        let mut n = Self {
            digits: smallvec![value],
        };
        n.trim();
        n
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        let mut n = Self {
            digits: smallvec![value as u32, (value >> 32) as u32],
        };
        n.trim();
        n
    }
}

impl From<u128> for Natural {
    fn from(value: u128) -> Self {
        let mut n = Self {
            digits: smallvec![
                value as u32,
                (value >> 32) as u32,
                (value >> 64) as u32,
                (value >> 96) as u32,
            ],
        };
        n.trim();
        n
    }
}

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl FromStr for Natural {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 0)
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for Natural {
    fn one() -> Self {
        Self::from(1u32)
    }

    fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lengths order first: the trimmed invariant makes a longer
        // digit sequence strictly larger.
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {
                for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        if rhs.digits.len() > self.digits.len() {
            self.digits.resize(rhs.digits.len(), 0);
        }
        let mut carry = 0u64;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            let r = rhs.digits.get(i).copied().map_or(0, u64::from);
            let t = u64::from(*digit) + r + carry;
            *digit = t as u32;
            carry = t >> 32;
        }
        if carry != 0 {
            self.digits.push(carry as u32);
        }
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Natural) {
        *self += &rhs;
    }
}

impl SubAssign<&Natural> for Natural {
    /// Saturating subtraction: a result that would be negative is zero.
    fn sub_assign(&mut self, rhs: &Natural) {
        if *self <= *rhs {
            self.digits.clear();
            return;
        }
        let mut borrow = false;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            let r = rhs.digits.get(i).copied().unwrap_or(0);
            let (t, b1) = digit.overflowing_sub(r);
            let (t, b2) = t.overflowing_sub(u32::from(borrow));
            *digit = t;
            borrow = b1 || b2;
        }
        self.trim();
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Natural) {
        *self -= &rhs;
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Mul for &Natural {
    type Output = Natural;

    /// Schoolbook long multiplication with a 64-bit accumulator.
    fn mul(self, rhs: &Natural) -> Natural {
        if self.digits.is_empty() || rhs.digits.is_empty() {
            return Natural::default();
        }
        let n = rhs.digits.len();
        let mut out: Digits = smallvec![0; self.digits.len() + n];
        for (i, &x) in self.digits.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &y) in rhs.digits.iter().enumerate() {
                let t = u64::from(x) * u64::from(y) + u64::from(out[i + j]) + carry;
                out[i + j] = t as u32;
                carry = t >> 32;
            }
            out[i + n] = carry as u32;
        }
        let mut out = Natural { digits: out };
        out.trim();
        out
    }
}

impl Div for &Natural {
    type Output = Natural;

    fn div(self, rhs: &Natural) -> Natural {
        self.div_rem(rhs).0
    }
}

impl Rem for &Natural {
    type Output = Natural;

    fn rem(self, rhs: &Natural) -> Natural {
        self.div_rem(rhs).1
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Natural) {
        *self = &*self * &rhs;
    }
}

impl DivAssign<&Natural> for Natural {
    fn div_assign(&mut self, rhs: &Natural) {
        *self = &*self / rhs;
    }
}

impl DivAssign for Natural {
    fn div_assign(&mut self, rhs: Natural) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&Natural> for Natural {
    fn rem_assign(&mut self, rhs: &Natural) {
        *self = &*self % rhs;
    }
}

impl RemAssign for Natural {
    fn rem_assign(&mut self, rhs: Natural) {
        *self = &*self % &rhs;
    }
}

impl BitAndAssign<&Natural> for Natural {
    fn bitand_assign(&mut self, rhs: &Natural) {
        self.digits.truncate(rhs.digits.len());
        for (digit, &r) in self.digits.iter_mut().zip(&rhs.digits) {
            *digit &= r;
        }
        self.trim();
    }
}

impl BitAndAssign for Natural {
    fn bitand_assign(&mut self, rhs: Natural) {
        *self &= &rhs;
    }
}

impl BitOrAssign<&Natural> for Natural {
    fn bitor_assign(&mut self, rhs: &Natural) {
        if rhs.digits.len() > self.digits.len() {
            self.digits.resize(rhs.digits.len(), 0);
        }
        for (digit, &r) in self.digits.iter_mut().zip(&rhs.digits) {
            *digit |= r;
        }
    }
}

impl BitOrAssign for Natural {
    fn bitor_assign(&mut self, rhs: Natural) {
        *self |= &rhs;
    }
}

impl BitXorAssign<&Natural> for Natural {
    fn bitxor_assign(&mut self, rhs: &Natural) {
        if rhs.digits.len() > self.digits.len() {
            self.digits.resize(rhs.digits.len(), 0);
        }
        for (digit, &r) in self.digits.iter_mut().zip(&rhs.digits) {
            *digit ^= r;
        }
        self.trim();
    }
}

impl BitXorAssign for Natural {
    fn bitxor_assign(&mut self, rhs: Natural) {
        *self ^= &rhs;
    }
}

impl BitAnd for &Natural {
    type Output = Natural;

    fn bitand(self, rhs: &Natural) -> Natural {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl BitOr for &Natural {
    type Output = Natural;

    fn bitor(self, rhs: &Natural) -> Natural {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl BitXor for &Natural {
    type Output = Natural;

    fn bitxor(self, rhs: &Natural) -> Natural {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

forward_binop!(impl Add, add for Natural);
forward_binop!(impl Sub, sub for Natural);
forward_binop!(impl Mul, mul for Natural);
forward_binop!(impl Div, div for Natural);
forward_binop!(impl Rem, rem for Natural);
forward_binop!(impl BitAnd, bitand for Natural);
forward_binop!(impl BitOr, bitor for Natural);
forward_binop!(impl BitXor, bitxor for Natural);

impl ShlAssign<usize> for Natural {
    fn shl_assign(&mut self, shift: usize) {
        if self.digits.is_empty() || shift == 0 {
            return;
        }
        let words = shift / WORD_BITS;
        let bits = (shift % WORD_BITS) as u32;
        let mut out: Digits = smallvec![0; self.digits.len() + words + 1];
        for (i, &digit) in self.digits.iter().enumerate() {
            let t = u64::from(digit) << bits;
            out[i + words] |= t as u32;
            out[i + words + 1] |= (t >> 32) as u32;
        }
        self.digits = out;
        self.trim();
    }
}

impl ShrAssign<usize> for Natural {
    fn shr_assign(&mut self, shift: usize) {
        if shift == 0 {
            return;
        }
        let words = shift / WORD_BITS;
        if words >= self.digits.len() {
            self.digits.clear();
            return;
        }
        let bits = (shift % WORD_BITS) as u32;
        let len = self.digits.len() - words;
        let mut out: Digits = smallvec![0; len];
        for (i, slot) in out.iter_mut().enumerate() {
            let lo = self.digits[i + words] >> bits;
            let hi = if bits == 0 {
                0
            } else {
                self.digits
                    .get(i + words + 1)
                    .map_or(0, |&d| d << (32 - bits))
            };
            *slot = lo | hi;
        }
        self.digits = out;
        self.trim();
    }
}

impl Shl<usize> for Natural {
    type Output = Natural;

    fn shl(mut self, shift: usize) -> Natural {
        self <<= shift;
        self
    }
}

impl Shl<usize> for &Natural {
    type Output = Natural;

    fn shl(self, shift: usize) -> Natural {
        let mut out = self.clone();
        out <<= shift;
        out
    }
}

impl Shr<usize> for Natural {
    type Output = Natural;

    fn shr(mut self, shift: usize) -> Natural {
        self >>= shift;
        self
    }
}

impl Shr<usize> for &Natural {
    type Output = Natural;

    fn shr(self, shift: usize) -> Natural {
        let mut out = self.clone();
        out >>= shift;
        out
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

impl fmt::LowerHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16))
    }
}

impl fmt::UpperHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16).to_ascii_uppercase())
    }
}

impl fmt::Octal for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_str_radix(8))
    }
}

impl fmt::Binary for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_str_radix(2))
    }
}
