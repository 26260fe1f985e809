// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_relative_eq;

/// Default epsilon for coordinate comparisons in decimal degrees.
///
/// About 1 cm on the ground; well below the precision a GPS block can encode.
pub const COORD_EPSILON: f64 = 1e-7;
