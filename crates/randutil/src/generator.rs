// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem::size_of;

use crate::choice::Choice;
use crate::error::{EntropyError, RandError};
use crate::traits::EntropySource;

/// Random value generator over an [`EntropySource`].
///
/// Every draw reads fresh 64-bit words from the entropy source; the generator
/// keeps no state of its own, so a shared reference can be used from many
/// threads when `E` is `Sync`.
///
/// All ranges are closed (`min..=max`), and bounded draws use widening
/// multiplication with rejection, so results carry no modulo bias.
///
/// # Example
///
/// ```rust
/// use randutil::{ASCII, Generator, SystemEntropySource};
///
/// let generator = Generator::new(SystemEntropySource {});
///
/// let password = generator.string_range(12, 20, ASCII).expect("Failed to generate password");
/// assert!((12..=20).contains(&password.chars().count()));
///
/// let colours = ["red", "green", "blue"];
/// let colour = generator.choose_string(&colours).expect("Failed to choose colour");
/// assert!(colours.contains(&colour));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Generator<E: EntropySource> {
    entropy: E,
}

impl<E: EntropySource> Generator<E> {
    /// Creates a new generator reading from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns the underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Consumes the generator, returning the underlying entropy source.
    pub fn into_inner(self) -> E {
        self.entropy
    }

    fn next_u64(&self) -> Result<u64, EntropyError> {
        let mut bytes = [0u8; size_of::<u64>()];
        self.entropy.fill_bytes(&mut bytes)?;

        Ok(u64::from_le_bytes(bytes))
    }

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    ///
    /// Lemire's widening multiply: the high word of `x * n` is the candidate,
    /// the low word decides rejection. An all-zero word yields `0` and an
    /// all-ones word yields `n - 1`.
    pub(crate) fn below(&self, n: u64) -> Result<u64, EntropyError> {
        debug_assert!(n > 0, "below() requires a non-empty range");

        let ints_to_reject = (u64::MAX - n + 1) % n;
        let zone = u64::MAX - ints_to_reject;

        loop {
            let wide = u128::from(self.next_u64()?) * u128::from(n);
            let hi = (wide >> 64) as u64;
            let lo = wide as u64;

            if lo <= zone {
                return Ok(hi);
            }
        }
    }

    /// Uniform integer in `[0, span]`.
    fn offset(&self, span: u64) -> Result<u64, EntropyError> {
        match span.checked_add(1) {
            Some(n) => self.below(n),
            // Full 64-bit span: every word is in range.
            None => self.next_u64(),
        }
    }

    fn len_range(&self, min: usize, max: usize) -> Result<usize, RandError> {
        if min > max {
            return Err(RandError::MinExceedsMax);
        }
        if min == max {
            return Ok(min);
        }

        let offset = self.offset((max - min) as u64)?;

        Ok(min + offset as usize)
    }

    /// Returns a random integer in `[min, max]`, both ends inclusive.
    ///
    /// When `min == max` the value is returned without reading entropy.
    ///
    /// # Errors
    ///
    /// - [`RandError::MinExceedsMax`] if `min > max`.
    /// - [`RandError::Entropy`] if the entropy source fails.
    pub fn int_range(&self, min: i64, max: i64) -> Result<i64, RandError> {
        if min > max {
            return Err(RandError::MinExceedsMax);
        }
        if min == max {
            return Ok(min);
        }

        // Two's complement: the distance between any two i64 fits in a u64.
        let span = max.wrapping_sub(min) as u64;
        let offset = self.offset(span)?;

        Ok(min.wrapping_add(offset as i64))
    }

    /// Returns a string of exactly `length` characters drawn uniformly from
    /// `charset`.
    ///
    /// The charset is read as a sequence of `char`s, so multi-byte characters
    /// count once. Duplicated characters are drawn proportionally more often.
    ///
    /// # Errors
    ///
    /// - [`RandError::EmptyCharset`] if `charset` is empty, even for `length == 0`.
    /// - [`RandError::Entropy`] if the entropy source fails.
    pub fn string(&self, length: usize, charset: &str) -> Result<String, RandError> {
        let chars = charset_chars(charset)?;

        self.string_from_chars(length, &chars)
    }

    /// Returns a string whose length is drawn from `[min, max]` and whose
    /// characters are drawn uniformly from `charset`.
    ///
    /// # Errors
    ///
    /// - [`RandError::EmptyCharset`] if `charset` is empty.
    /// - [`RandError::MinExceedsMax`] if `min > max`.
    /// - [`RandError::Entropy`] if the entropy source fails.
    pub fn string_range(&self, min: usize, max: usize, charset: &str) -> Result<String, RandError> {
        let chars = charset_chars(charset)?;
        let length = self.len_range(min, max)?;

        self.string_from_chars(length, &chars)
    }

    /// Returns a random [`ALPHANUMERIC`](crate::ALPHANUMERIC) string `length` characters long.
    pub fn alpha_string(&self, length: usize) -> Result<String, RandError> {
        self.string(length, crate::ALPHANUMERIC)
    }

    /// Returns a random [`ALPHANUMERIC`](crate::ALPHANUMERIC) string whose
    /// length is drawn from `[min, max]`.
    pub fn alpha_string_range(&self, min: usize, max: usize) -> Result<String, RandError> {
        self.string_range(min, max, crate::ALPHANUMERIC)
    }

    fn string_from_chars(&self, length: usize, chars: &[char]) -> Result<String, RandError> {
        let count = chars.len() as u64;
        let mut out = String::with_capacity(length);

        for _ in 0..length {
            let index = self.below(count)? as usize;
            out.push(chars[index]);
        }

        Ok(out)
    }

    /// Returns a uniformly chosen element of `choices`.
    ///
    /// # Errors
    ///
    /// - [`RandError::EmptyChoices`] if `choices` is empty.
    /// - [`RandError::Entropy`] if the entropy source fails.
    pub fn choose<'a, T>(&self, choices: &'a [T]) -> Result<&'a T, RandError> {
        if choices.is_empty() {
            return Err(RandError::EmptyChoices);
        }

        let index = self.below(choices.len() as u64)? as usize;

        Ok(&choices[index])
    }

    /// Returns a uniformly chosen string from `choices`.
    ///
    /// See [`Generator::choose`].
    pub fn choose_string<'a, S: AsRef<str>>(&self, choices: &'a [S]) -> Result<&'a str, RandError> {
        self.choose(choices).map(AsRef::as_ref)
    }

    /// Returns a uniformly chosen integer from `choices`.
    ///
    /// See [`Generator::choose`].
    pub fn choose_int(&self, choices: &[i64]) -> Result<i64, RandError> {
        self.choose(choices).copied()
    }

    /// Returns one of `choices`, each selected with probability
    /// `weight / total`.
    ///
    /// Draws `r` uniformly from `[0, total)` and walks the list in order,
    /// returning the first choice whose weight exceeds the remainder.
    ///
    /// # Errors
    ///
    /// - [`RandError::ZeroTotalWeight`] if the weights sum to zero (this
    ///   includes an empty list).
    /// - [`RandError::WeightOverflow`] if the weights sum beyond `u64::MAX`.
    /// - [`RandError::Entropy`] if the entropy source fails.
    pub fn weighted_choice<'a, T>(
        &self,
        choices: &'a [Choice<T>],
    ) -> Result<&'a Choice<T>, RandError> {
        let total = choices
            .iter()
            .try_fold(0u64, |acc, choice| acc.checked_add(choice.weight))
            .ok_or(RandError::WeightOverflow)?;

        if total == 0 {
            return Err(RandError::ZeroTotalWeight);
        }

        let mut remaining = self.below(total)?;

        for choice in choices {
            if remaining < choice.weight {
                return Ok(choice);
            }
            remaining -= choice.weight;
        }

        // remaining < total == sum(weights), so the loop always returns.
        debug_assert!(false, "weighted choice ran past the last candidate");

        Err(RandError::WeightsExhausted)
    }
}

fn charset_chars(charset: &str) -> Result<Vec<char>, RandError> {
    let chars: Vec<char> = charset.chars().collect();

    if chars.is_empty() {
        return Err(RandError::EmptyCharset);
    }

    Ok(chars)
}
