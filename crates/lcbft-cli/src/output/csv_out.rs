use serde_json::Value;
use std::io;

/// Write output as two-column CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                match val {
                    // Sub-score objects flatten to their score; the
                    // justification trail stays in its own row.
                    Value::Object(sub) if sub.contains_key("score") => {
                        if let Some(score) = sub.get("score") {
                            let _ =
                                wtr.write_record([&format!("{}_score", key), &score.to_string()]);
                        }
                        if let Some(Value::Array(just)) = sub.get("justifications") {
                            let _ = wtr.write_record([
                                &format!("{}_justifications", key),
                                &join_strings(just),
                            ]);
                        }
                    }
                    _ => {
                        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                    }
                }
            }
        }
        Value::Array(arr) => {
            for item in arr {
                let _ = wtr.write_record([&format_csv_value(item)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn join_strings(arr: &[Value]) -> String {
    let items: Vec<String> = arr.iter().map(format_csv_value).collect();
    items.join("; ")
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => join_strings(arr),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
