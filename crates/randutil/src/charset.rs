// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Upper-case letters, digits and lower-case letters (62 characters).
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890abcdefghijklmnopqrstuvwxyz";

/// [`ALPHANUMERIC`] followed by printable punctuation and symbols (94 characters).
pub const ASCII: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890abcdefghijklmnopqrstuvwxyz",
    "~!@#$%^&*()-_+={}[]\\|<,>.?/\"';:`",
);
