pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten a JSON value into (dotted-path, scalar) pairs in field order.
/// Engine results nest several levels deep (category -> triple -> figure),
/// so the tabular formatters all render leaves against their paths.
pub fn flatten_leaves(value: &Value) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    collect_leaves("", value, &mut leaves);
    leaves
}

fn collect_leaves(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(&path, val, out);
            }
        }
        Value::Array(arr) => {
            for (i, val) in arr.iter().enumerate() {
                collect_leaves(&format!("{}[{}]", prefix, i), val, out);
            }
        }
        scalar => out.push((prefix.to_string(), scalar_to_string(scalar))),
    }
}

pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
