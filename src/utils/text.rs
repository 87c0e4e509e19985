//! Text cleanup applied to server-provided strings before they reach
//! provider state.
//!
//! The gateway stores some free text with quote characters and doubly
//! escaped Unicode (an accented letter arrives as a backslash, a `u` and
//! four hex digits).
//! [`sanitize`] strips the quotes and [`decode_unicode_escapes`] turns the
//! escape sequences back into characters.

use serde_json::Value;

/// Remove every single and double quote character.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

/// Records whose free-text fields are cleaned with [`sanitize`].
pub trait Sanitize {
    fn sanitized(self) -> Self;
}

/// Recursively replace `\uXXXX` sequences in every string leaf of `value`.
///
/// Numbers, booleans and null pass through untouched. Object keys are kept
/// as they are.
pub fn decode_unicode_escapes(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(decode_escapes_in_str(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(decode_unicode_escapes).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, decode_unicode_escapes(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Replace `\uXXXX` (hex digits in either case) with the character it names.
///
/// Surrogate pairs written as two consecutive escapes are combined. Anything
/// that does not form a valid character is left verbatim.
pub fn decode_escapes_in_str(text: &str) -> String {
    if !text.contains("\\u") {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let Some(unit) = escape_at(&chars, i) else {
            out.push(chars[i]);
            i += 1;
            continue;
        };

        if (0xD800..0xDC00).contains(&unit) {
            if let Some(low) = escape_at(&chars, i + 6).filter(|low| (0xDC00..0xE000).contains(low)) {
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(combined) {
                    out.push(c);
                    i += 12;
                    continue;
                }
            }
        }

        match char::from_u32(unit) {
            Some(c) => out.push(c),
            // Lone surrogate
            None => out.extend(&chars[i..i + 6]),
        }
        i += 6;
    }

    out
}

/// Code unit of a `\uXXXX` escape starting at `at`, if there is one.
fn escape_at(chars: &[char], at: usize) -> Option<u32> {
    if at + 6 > chars.len() || chars[at] != '\\' || chars[at + 1] != 'u' {
        return None;
    }
    chars[at + 2..at + 6]
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(16).map(|d| acc * 16 + d))
}
