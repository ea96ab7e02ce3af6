//! Change summaries for audit entries
//!
//! Compares the JSON form of a record before and after an update and lists
//! the top-level fields that changed.

use serde_json::Value;

/// Summarise top-level field changes between two JSON objects
///
/// Returns `None` when nothing changed. `updated_at` is ignored because every
/// event update refreshes it.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes: Vec<String> = before_obj
        .iter()
        .filter(|(key, _)| key.as_str() != "updated_at")
        .filter_map(|(key, old)| match after_obj.get(key) {
            Some(new) if new != old => Some(format!(
                "{}: {} -> {}",
                key,
                format_value(old),
                format_value(new)
            )),
            Some(_) => None,
            None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
        })
        .collect();

    changes.extend(
        after_obj
            .iter()
            .filter(|(key, _)| !before_obj.contains_key(*key))
            .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new))),
    );

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Short human-readable rendering of a JSON value
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
