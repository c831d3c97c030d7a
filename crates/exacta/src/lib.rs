//! # Exacta
//!
//! Exact arbitrary precision arithmetic as plain value types.
//!
//! - [`Natural`](exacta_integers::Natural): unsigned big integer with
//!   saturating subtraction
//! - [`Integer`](exacta_integers::Integer): signed big integer with
//!   Euclidean division
//! - [`Rational`](exacta_rational::Rational): exact fractions over any
//!   integer-like component type
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let n: Natural = "123456789123456789123456789".parse().unwrap();
//! let q = BigRational::parse("2 3/4").unwrap();
//! assert_eq!(q.to_string(), "11/4");
//! assert_eq!(n.bit_len(), 87);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_integers as integers;
pub use exacta_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_integers::{Integer, Natural, ParseError};
    pub use exacta_rational::{BigRational, IntegerLike, ParseRationalError, Rational};
}
