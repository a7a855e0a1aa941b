use serde_json::Value;
use std::io;

use super::flatten_leaves;

/// Write output as field,value CSV to stdout. Envelope outputs emit only
/// their `result` section; warnings and metadata stay out of the export.
pub fn print_csv(value: &Value) {
    let body = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    for (path, rendered) in flatten_leaves(body) {
        let _ = wtr.write_record([path.as_str(), rendered.as_str()]);
    }
    let _ = wtr.flush();
}
