// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float assertions come from the `approx` crate; plain `assert_eq!` is too
//! strict for values that go through animation-progress arithmetic.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons of layout and progress values.
pub const F32_EPSILON: f32 = 1e-6;
