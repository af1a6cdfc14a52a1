// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free functions bound to [`SystemEntropySource`].
//!
//! Each call builds a zero-sized `Generator<SystemEntropySource>` and
//! delegates to it; see [`Generator`] for semantics and errors.

use alloc::string::String;

use crate::choice::Choice;
use crate::error::RandError;
use crate::generator::Generator;
use crate::system::SystemEntropySource;

#[inline(always)]
fn system() -> Generator<SystemEntropySource> {
    Generator::new(SystemEntropySource {})
}

/// Returns a random integer in `[min, max]`. See [`Generator::int_range`].
pub fn int_range(min: i64, max: i64) -> Result<i64, RandError> {
    system().int_range(min, max)
}

/// Returns a random string of `length` characters from `charset`. See [`Generator::string`].
pub fn string(length: usize, charset: &str) -> Result<String, RandError> {
    system().string(length, charset)
}

/// Returns a random string from `charset` with length in `[min, max]`.
/// See [`Generator::string_range`].
pub fn string_range(min: usize, max: usize, charset: &str) -> Result<String, RandError> {
    system().string_range(min, max, charset)
}

/// Returns a random alphanumeric string of `length` characters.
pub fn alpha_string(length: usize) -> Result<String, RandError> {
    system().alpha_string(length)
}

/// Returns a random alphanumeric string with length in `[min, max]`.
pub fn alpha_string_range(min: usize, max: usize) -> Result<String, RandError> {
    system().alpha_string_range(min, max)
}

/// Returns a uniformly chosen element. See [`Generator::choose`].
pub fn choose<T>(choices: &[T]) -> Result<&T, RandError> {
    system().choose(choices)
}

/// Returns a uniformly chosen string. See [`Generator::choose_string`].
pub fn choose_string<S: AsRef<str>>(choices: &[S]) -> Result<&str, RandError> {
    system().choose_string(choices)
}

/// Returns a uniformly chosen integer. See [`Generator::choose_int`].
pub fn choose_int(choices: &[i64]) -> Result<i64, RandError> {
    system().choose_int(choices)
}

/// Returns a choice selected proportionally to its weight.
/// See [`Generator::weighted_choice`].
pub fn weighted_choice<T>(choices: &[Choice<T>]) -> Result<&Choice<T>, RandError> {
    system().weighted_choice(choices)
}
