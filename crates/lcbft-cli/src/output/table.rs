use serde_json::Value;
use tabled::{builder::Builder, Table};

use lcbft_core::scoring::recommendations::strip_markup;

/// Format output as a table using the tabled crate.
///
/// Assessment results get a dedicated layout: a score summary table
/// followed by the justification and recommendation lists. Anything else
/// falls back to a flat Field/Value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("total_score") => {
            print_assessment_table(map);
        }
        Value::Object(_) => print_flat_object(value),
        _ => println!("{}", value),
    }
}

fn print_assessment_table(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Score"]);

    for (label, key) in [
        ("Geographic", "geographic"),
        ("Product/Service", "product_service"),
        ("Client", "client"),
    ] {
        if let Some(score) = map.get(key).and_then(|s| s.get("score")) {
            builder.push_record([label, &score.to_string()]);
        }
    }
    if let Some(total) = map.get("total_score") {
        builder.push_record(["Total", &total.to_string()]);
    }
    if let Some(Value::String(level)) = map.get("risk_level") {
        builder.push_record(["Risk level", level]);
    }
    println!("{}", Table::from(builder));

    for (title, key) in [
        ("Geographic factors", "geographic"),
        ("Product/service factors", "product_service"),
        ("Client factors", "client"),
    ] {
        if let Some(Value::Array(items)) = map.get(key).and_then(|s| s.get("justifications")) {
            if !items.is_empty() {
                println!("\n{}:", title);
                for item in items {
                    if let Value::String(s) = item {
                        println!("  - {}", s);
                    }
                }
            }
        }
    }

    if let Some(Value::Array(recs)) = map.get("recommendations") {
        if !recs.is_empty() {
            println!("\nRecommendations:");
            for rec in recs {
                if let Value::String(s) = rec {
                    println!("  - {}", strip_markup(s));
                }
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
