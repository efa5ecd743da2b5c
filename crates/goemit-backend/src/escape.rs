// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Go literal spelling helpers
//!
//! String quoting follows `strconv.Quote`; float formatting keeps the shortest
//! decimal that round-trips and always reads as a floating-point literal.

/// Quote a string as a Go interpreted string literal.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x80 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else {
                    out.push_str(&format!("\\u{:04x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Spell a finite float as a Go floating-point literal.
///
/// Returns `None` for NaN and infinities, which have no literal form.
pub fn format_float(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    // `Display` never uses exponent notation and never leaves trailing zeros
    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    Some(s)
}

/// Right-pad `name` with spaces to `width` characters.
pub fn pad_right(name: &str, width: usize) -> String {
    format!("{:<width$}", name, width = width)
}
