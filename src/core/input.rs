//! Input cleaning shared by all validators.

/// Whether `c` is a formatting separator users put into identifiers
/// ("DE89 3704 ...", "21/815/08150", "DEUT-DE-FF").
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '/' | '.')
}

/// Remove formatting separators and uppercase the rest.
pub fn compact_upper(value: &str) -> String {
    value
        .chars()
        .filter(|&c| !is_separator(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Remove formatting separators, keeping every other character as-is.
pub fn compact(value: &str) -> String {
    value.chars().filter(|&c| !is_separator(c)).collect()
}

/// Keep only ASCII decimal digits.
pub fn ascii_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Coerce a JSON value to the string a validator should see.
///
/// `null` yields `None`. Strings pass through, numbers and booleans use their
/// JSON text, arrays and objects their compact JSON encoding.
#[cfg(feature = "json")]
pub fn coerce_json(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
