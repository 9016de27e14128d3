//! `mod2matrix` is a Rust library for square matrix algebra over the 2-element finite field. Some features include:
//! - construction from nested integer rows (reduced mod 2), zero and identity matrices
//! - addition and subtraction (which coincide over GF(2))
//! - naive cubic matrix multiplication
//! - splitting a matrix into quadrants and gluing quadrants back together
//! - recursive [Strassen multiplication](https://en.wikipedia.org/wiki/Strassen_algorithm) for
//!   power-of-two orders, optionally evaluating the seven sub-products in parallel
//!
//! The two main data structures provided by this crate are:
//! - [`Mod2`]: a single element of GF(2), where addition is XOR and multiplication is AND
//! - [`SquareMatrix`]: an immutable `n`x`n` matrix of [`Mod2`] values

#![allow(
    clippy::needless_range_loop,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl,
    clippy::uninlined_format_args,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod error;
pub mod matrix;
pub mod mod2;

pub use error::{MatrixError, Result};
pub use matrix::{Quadrants, Row, SquareMatrix};
#[cfg(feature = "parallel")]
pub use matrix::parallel::{ParallelMatrixOps, StrassenConfig};
pub use mod2::Mod2;
