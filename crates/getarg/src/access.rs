//! Typed readers over a resolved [`ArgumentStore`].
//!
//! Presence always beats the caller's default: a bare flag reads as `""`,
//! `0` or `true` rather than falling back.

use crate::store::ArgumentStore;

/// Everything except the exact string `"0"` is true, including `""`.
pub fn interpret_bool(value: &str) -> bool {
    value != "0"
}

/// Read a leading base-10 integer the way C `atoi64` does.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// digits; anything after it is ignored. No digits reads as `0`. Out-of-range
/// values saturate.
pub fn parse_int(value: &str) -> i64 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
    }
    acc
}

impl ArgumentStore {
    /// Whether `name` was given (or derived from a negation), whatever its value.
    pub fn is_set(&self, name: &str) -> bool {
        self.first_value(name).is_some()
    }

    /// First value of `name`, verbatim, or `default` when absent.
    pub fn get_string<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.first_value(name).unwrap_or(default)
    }

    /// First value of `name` as an integer, or `default` when absent.
    ///
    /// A present but unparsable value reads as `0`, not as `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.first_value(name).map(parse_int).unwrap_or(default)
    }

    /// First value of `name` as a boolean, or `default` when absent.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.first_value(name)
            .map(interpret_bool)
            .unwrap_or(default)
    }
}
