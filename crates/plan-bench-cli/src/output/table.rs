use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::flatten_leaves;

/// Format output as a field/value table using the tabled crate.
///
/// Envelope outputs render their `result` section as the table, with
/// warnings and methodology printed beneath; bare values render directly.
pub fn print_table(value: &Value) {
    let (body, envelope) = match value {
        Value::Object(map) if map.contains_key("result") => {
            (map.get("result").unwrap_or(value), Some(map))
        }
        _ => (value, None),
    };

    let leaves = flatten_leaves(body);
    if leaves.is_empty() {
        println!("(empty)");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (path, rendered) in &leaves {
            builder.push_record([path.as_str(), rendered.as_str()]);
        }
        println!("{}", Table::from(builder));
    }

    if let Some(map) = envelope {
        if let Some(Value::Array(warnings)) = map.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for warning in warnings {
                    if let Value::String(s) = warning {
                        println!("  - {}", s);
                    }
                }
            }
        }
        if let Some(Value::String(methodology)) = map.get("methodology") {
            println!("\nMethodology: {}", methodology);
        }
    }
}
