// String Utilities
// Coercion of absent or loosely-typed values into safe strings

use serde_yaml::Value;

/// Return `value`, or `default` when it is absent or empty.
///
/// The value is returned untrimmed; callers that need trimming do it
/// themselves.
pub fn to_string_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Same as [`to_string_or`] with an empty default
pub fn to_string_safe(value: Option<&str>) -> String {
    to_string_or(value, "")
}

/// Lowercased, trimmed form used for case-insensitive comparisons
pub fn normalize_string(value: Option<&str>) -> String {
    to_string_safe(value).to_lowercase().trim().to_string()
}

/// Trimmed value, or `None` if nothing is left
pub fn non_empty_trimmed(value: Option<&str>) -> Option<String> {
    let trimmed = to_string_safe(value).trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Textual form of a YAML scalar.
///
/// `null` and `false` count as absent, like the other falsy values the
/// configuration may contain. Sequences and mappings are not scalars and
/// are also absent.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
