// Copyright (c) 2026 The contest-utils contributors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Bit manipulation helpers and debugging conveniences for competitive
//! programming.
//!
//! All helpers are pure functions over caller-owned values, so they are
//! trivially safe to call from any thread. Whole-container traversal needs no
//! dedicated helper: the [`IntoIterator`] protocol already covers it, e.g.
//! `for x in &values { .. }` or `values.iter().max()`.

/// Conversion from lowercase ASCII letters to alphabet positions.
pub mod alphabet;

/// Helpers to set, clear and toggle single bits of a `u64`.
pub mod bits;

pub use alphabet::letter_to_index;
pub use bits::{clear_bit, set_bit, toggle_bit};

/// Prints `expression = value` to stderr for quick inspection.
///
/// The expression's source text is captured at the call site and its value is
/// rendered with [`std::fmt::Debug`], so vectors, maps and tuples print
/// readably. The expression is evaluated exactly once and is not moved.
///
/// ```
/// let scores = vec![3u64, 1, 4];
///
/// contest_utils::inspect!(scores);
/// contest_utils::inspect!(scores.len());
/// ```
#[macro_export]
macro_rules! inspect {
    ($expr:expr $(,)?) => {
        eprintln!("{} = {:?}", stringify!($expr), $expr)
    };
}
