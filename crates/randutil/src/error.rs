// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when reading from an entropy source.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors returned by [`Generator`](crate::Generator) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandError {
    /// Range lower bound is greater than its upper bound.
    #[error("min cannot exceed max")]
    MinExceedsMax,

    /// Charset contains no characters.
    #[error("charset cannot be empty")]
    EmptyCharset,

    /// Candidate list contains no elements.
    #[error("choices cannot be empty")]
    EmptyChoices,

    /// Weights sum to zero (or there are no weighted choices at all).
    #[error("total weight must be positive")]
    ZeroTotalWeight,

    /// Weights sum beyond `u64::MAX`.
    #[error("total weight overflows u64")]
    WeightOverflow,

    /// Weighted selection ran past the last choice.
    ///
    /// Cannot happen for a positive total; reported instead of panicking in
    /// release builds.
    #[error("weighted choice exhausted all candidates")]
    WeightsExhausted,

    /// Underlying entropy source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
