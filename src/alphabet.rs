// Copyright (c) 2026 The contest-utils contributors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Conversion from lowercase ASCII letters to alphabet positions.

/// Returns the zero-based alphabet position of a lowercase ASCII letter.
///
/// `'a'` maps to 0 and `'z'` to 25. The result is returned as `usize` so it
/// can index tables directly. The input must be in `'a'..='z'`; no validation
/// is performed and the result is unspecified for any other character.
///
/// ```
/// assert_eq!(contest_utils::letter_to_index('m'), 12);
/// ```
pub const fn letter_to_index(letter: char) -> usize {
    letter as usize - 'a' as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first('a', 0)]
    #[case::middle('m', 12)]
    #[case::last('z', 25)]
    fn test_letter_to_index(#[case] letter: char, #[case] expected: usize) {
        assert_eq!(letter_to_index(letter), expected);
    }

    #[test]
    fn test_covers_whole_alphabet() {
        for (index, letter) in ('a'..='z').enumerate() {
            assert_eq!(letter_to_index(letter), index);
        }
    }
}
