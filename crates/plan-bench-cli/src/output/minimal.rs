use serde_json::Value;

use super::scalar_to_string;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority, then
/// fall back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "overall_score",
        "total",
        "overall",
        "p50",
        "dollar_amount",
        "percentage",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", render(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, render(val));
            return;
        }
    }

    println!("{}", render(result_obj));
}

fn render(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => serde_json::to_string(value).unwrap_or_default(),
        scalar => scalar_to_string(scalar),
    }
}
