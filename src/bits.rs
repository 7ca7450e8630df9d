// Copyright (c) 2026 The contest-utils contributors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Single-bit manipulation of `u64` values.
//!
//! Bit positions are 1-indexed from the least significant bit: `k == 1` is the
//! LSB and `k == 64` the MSB. `k` must be in `[1, 64]`. None of the functions
//! range-check `k`; an out-of-range position overflows the shift, which panics
//! in debug builds.

/// Returns `n` with bit `k` forced to 1.
///
/// ```
/// assert_eq!(contest_utils::set_bit(0b0000, 1), 0b0001);
/// ```
pub const fn set_bit(n: u64, k: u32) -> u64 {
    n | (1 << (k - 1))
}

/// Returns `n` with bit `k` forced to 0.
///
/// ```
/// assert_eq!(contest_utils::clear_bit(0b1111, 1), 0b1110);
/// ```
pub const fn clear_bit(n: u64, k: u32) -> u64 {
    n & !(1 << (k - 1))
}

/// Returns `n` with bit `k` flipped.
///
/// ```
/// assert_eq!(contest_utils::toggle_bit(0b0101, 2), 0b0111);
/// ```
pub const fn toggle_bit(n: u64, k: u32) -> u64 {
    n ^ (1 << (k - 1))
}
