//! # Value Checkers
//!
//! Pure predicates over JSON values. None of them panic; anything that cannot
//! be checked is simply invalid.

use serde_json::Value;

/// Largest magnitude accepted as a finite attribute number (2^53).
pub const FINITE_NUMBER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// True iff `value` is absent, `null`, or a JSON object.
///
/// JSON object keys are always strings, so any object qualifies.
pub fn is_mapping_or_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null) | Some(Value::Object(_)))
}

/// True iff `attributes` is absent or a mapping.
pub fn attributes_valid(attributes: Option<&Value>) -> bool {
    is_mapping_or_absent(attributes)
}

/// True iff `event_tags` is absent or a mapping.
pub fn event_tags_valid(event_tags: Option<&Value>) -> bool {
    is_mapping_or_absent(event_tags)
}

/// True iff `s` is a complete numeric literal.
///
/// Accepts decimal and exponent forms (`3.14`, `12e4`), hexadecimal integers
/// (`0x1A`), and single underscores between digits (`1_000`). Surrounding
/// whitespace is ignored. Named values (`inf`, `NaN`) and a trailing decimal
/// point are rejected.
pub fn string_numeric(s: &str) -> bool {
    let s = s.trim();
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        return !hex.is_empty()
            && hex.chars().all(|c| c.is_ascii_hexdigit() || c == '_')
            && underscores_between(hex, |c| c.is_ascii_hexdigit());
    }

    if s.is_empty() || s.ends_with('.') || !underscores_between(s, |c| c.is_ascii_digit()) {
        return false;
    }
    if s.chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return false;
    }
    s.replace('_', "").parse::<f64>().is_ok()
}

/// Every `_` in `s` sits between two characters accepted by `digit`.
fn underscores_between(s: &str, digit: impl Fn(char) -> bool) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.iter().enumerate().all(|(i, &c)| {
        c != '_'
            || (i > 0 && i + 1 < chars.len() && digit(chars[i - 1]) && digit(chars[i + 1]))
    })
}

/// [`string_numeric`] over an arbitrary value; false for non-strings.
pub fn value_numeric(value: &Value) -> bool {
    value.as_str().is_some_and(string_numeric)
}

/// True iff `value` is a number whose magnitude is at most 2^53.
pub fn finite_number(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.abs() <= FINITE_NUMBER_LIMIT)
}

/// True iff `value` may be used as an attribute value for targeting:
/// a string, a boolean, or a finite number.
pub fn attribute_value_valid(value: &Value) -> bool {
    match value {
        Value::String(_) | Value::Bool(_) => true,
        Value::Number(_) => finite_number(value),
        _ => false,
    }
}

/// True iff `key` is non-empty and `value` is a valid attribute value.
pub fn attribute_valid(key: &str, value: &Value) -> bool {
    !key.is_empty() && attribute_value_valid(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every finite float renders to a numeric string.
        #[test]
        fn finite_floats_are_numeric(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
            let plain = n.to_string();
            let exponent = format!("{n:e}");
            prop_assert!(string_numeric(&plain));
            prop_assert!(string_numeric(&exponent));
        }

        /// A numeric string followed by letters is never numeric.
        #[test]
        fn letter_suffix_is_rejected(n in any::<i32>(), suffix in "[g-wyz]{1,4}") {
            let s = format!("{n}{suffix}");
            prop_assert!(!string_numeric(&s));
        }

        /// The checker never panics on arbitrary input.
        #[test]
        fn string_numeric_total(s in ".*") {
            let _ = string_numeric(&s);
        }
    }
}
