// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randutil
//!
//! Cryptographically sourced random values: bounded integers, random strings
//! over a charset, uniform choices and weighted choices.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Generator`]: Random value generator over any [`EntropySource`]
//! - [`Choice`]: Weighted candidate for [`Generator::weighted_choice`]
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Ranges
//!
//! Every range is closed: `int_range(1, 6)` may return `1` and `6`. Draws are
//! unbiased (widening multiply with rejection), so charsets and candidate
//! lists of any length are sampled uniformly.
//!
//! ## Example
//!
//! ```rust
//! use randutil::{ALPHANUMERIC, Choice, Generator, SystemEntropySource};
//!
//! let generator = Generator::new(SystemEntropySource {});
//!
//! let die = generator.int_range(1, 6).expect("Failed to roll");
//! assert!((1..=6).contains(&die));
//!
//! let token = generator.string(16, ALPHANUMERIC).expect("Failed to generate token");
//! assert_eq!(token.chars().count(), 16);
//!
//! let choices = [Choice::new(1, "rare"), Choice::new(9, "common")];
//! let picked = generator.weighted_choice(&choices).expect("Failed to choose");
//! assert!(picked.item == "rare" || picked.item == "common");
//! ```
//!
//! The same operations are available as free functions bound to the system
//! entropy source:
//!
//! ```rust
//! let n = randutil::int_range(-10, 10).expect("Failed to generate int");
//! assert!((-10..=10).contains(&n));
//!
//! let s = randutil::alpha_string_range(8, 12).expect("Failed to generate string");
//! assert!((8..=12).contains(&s.len()));
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod charset;
mod choice;
mod error;
mod functions;
mod generator;
mod support;
mod system;
mod traits;

pub use charset::{ALPHANUMERIC, ASCII};
pub use choice::Choice;
pub use error::{EntropyError, RandError};
pub use functions::{
    alpha_string, alpha_string_range, choose, choose_int, choose_string, int_range, string,
    string_range, weighted_choice,
};
pub use generator::Generator;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
