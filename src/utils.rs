// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hex formatting helpers shared by the CLI and tests.

use std::fmt::Write;

/// Format bytes as uppercase hex pairs separated by single spaces.
///
/// - `[]` → `""`
/// - `[0x30, 0x00]` → `"30 00"`
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{:02X}", b);
    }
    out
}

/// Parse whitespace-separated hex pairs (`"30 03 02 01 00"`).
///
/// Whitespace between pairs is optional, so `"3003020100"` parses too.
/// Returns `None` on an odd digit count or a non-hex character.
pub fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    if digits.len() % 2 != 0 {
        return None;
    }
    Some(digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
}
