//! # exacta-rational
//!
//! Exact rational arithmetic, generic over the integer component type.
//!
//! [`Rational`] works over the built-in signed integers for fixed-range
//! work and over [`exacta_integers::Integer`] when overflow is not an
//! option; the [`IntegerLike`] trait is the seam between the two.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational};
pub use traits::IntegerLike;

/// A rational with arbitrary precision components.
pub type BigRational = Rational<exacta_integers::Integer>;
