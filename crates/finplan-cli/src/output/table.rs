use colored::Colorize;
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

/// Render the result as tables.
///
/// Scalar fields go in a two-column table. Lists of records such as
/// `yearly_needs` or `slab_breakdown` get a table each, and lists of text
/// such as `steps` or `tips` print as bullets.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => {
                print_fields(result);
                print_envelope(map);
            }
            _ => print_fields(map),
        },
        Value::Array(rows) => print_records(rows),
        other => println!("{}", other),
    }
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut records = Vec::new();
    let mut lists = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(items) if items.iter().any(Value::is_object) => records.push((key, items)),
            Value::Array(items) if !items.is_empty() => lists.push((key, items)),
            _ => builder.push_record([key.as_str(), &format_value(val)]),
        }
    }
    println!("{}", Table::from(builder));

    for (key, items) in records {
        println!("\n{}", key.bold());
        print_records(items);
    }
    for (key, items) in lists {
        println!("\n{}", key.bold());
        for item in items {
            println!("  - {}", format_value(item));
        }
    }
}

fn print_envelope(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow().bold());
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }
    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_records(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", format_value(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(h).map(format_value).unwrap_or_default()),
            );
        }
    }
    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(items) => items.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
