// ABOUTME: Tokenizer locating the first numeric run in a free-text quantity line
// ABOUTME: Rewrites that single token with a two-decimal rendering of a new amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;

/// First numeric token found in a string
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    /// Byte range of the token within the scanned string
    pub span: Range<usize>,
    /// Parsed value of the token
    pub value: f64,
}

/// Find the first integer or decimal run, scanning left to right.
///
/// A token is one or more ASCII digits, optionally followed by `.` and one or
/// more digits. A trailing `.` with no digits after it is not part of the
/// token, and a leading `.` is not either (`".5"` yields `5`).
#[must_use]
pub fn first_numeric_token(text: &str) -> Option<NumericToken> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    // digits and '.' are ASCII, so the range sits on char boundaries
    let value = text[start..end].parse::<f64>().ok()?;
    Some(NumericToken {
        span: start..end,
        value,
    })
}

/// Render an amount with two decimals, trimming an exact `.00` suffix.
///
/// Ties round away from zero, so `0.125` renders as `"0.13"`.
/// `4.0` renders as `"4"`, `2.5` as `"2.50"`, `0.333` as `"0.33"`.
#[must_use]
pub fn format_quantity(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let rendered = format!("{rounded:.2}");
    match rendered.strip_suffix(".00") {
        Some(whole) if whole == "-0" => "0".to_owned(),
        Some(whole) => whole.to_owned(),
        None => rendered,
    }
}

/// Replace the first numeric token of `text` with `amount`.
///
/// Text without a numeric token is returned unchanged.
#[must_use]
pub fn rewrite_first_quantity(text: &str, amount: f64) -> String {
    let Some(token) = first_numeric_token(text) else {
        return text.to_owned();
    };

    let replacement = format_quantity(amount);
    let mut rewritten = String::with_capacity(text.len() + replacement.len());
    rewritten.push_str(&text[..token.span.start]);
    rewritten.push_str(&replacement);
    rewritten.push_str(&text[token.span.end..]);
    rewritten
}
