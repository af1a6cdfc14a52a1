// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A candidate for [`Generator::weighted_choice`](crate::Generator::weighted_choice).
///
/// The probability of selecting a choice is `weight / total`, where `total`
/// is the sum of all weights in the list. A zero weight is allowed and is
/// never selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<T> {
    /// Relative selection weight.
    pub weight: u64,
    /// Payload returned with the choice.
    pub item: T,
}

impl<T> Choice<T> {
    /// Creates a new weighted choice.
    pub fn new(weight: u64, item: T) -> Self {
        Self { weight, item }
    }
}

impl<T> From<(u64, T)> for Choice<T> {
    fn from((weight, item): (u64, T)) -> Self {
        Self::new(weight, item)
    }
}
