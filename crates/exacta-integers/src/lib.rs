//! # exacta-integers
//!
//! Arbitrary precision natural and signed integer arithmetic.
//!
//! This crate implements the multi-word arithmetic itself:
//! - [`Natural`] stores an unsigned magnitude as base-2^32 digits
//! - [`Integer`] pairs a `Natural` magnitude with a sign flag
//!
//! ## Performance Notes
//!
//! - Values up to 2^128 keep their digits on the stack (`smallvec`)
//! - Larger values spill to the heap transparently

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Forwards the owned operand combinations of a binary operator to the
// `&T op &T` implementation.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl std::ops::$imp for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&$t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

pub mod error;
pub mod integer;
pub mod natural;

#[cfg(test)]
mod proptests;

pub use error::ParseError;
pub use integer::Integer;
pub use natural::Natural;
