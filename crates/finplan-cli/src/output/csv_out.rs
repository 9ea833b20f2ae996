use serde_json::{Map, Value};
use std::io;

/// Write the result as CSV on stdout.
///
/// Scalar fields come first as `field,value` rows. Each list of records
/// (yearly needs, slab breakdown) follows as its own block, separated by a
/// blank line and headed by the field name.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let outcome = match result {
        Value::Object(map) => write_object(&mut wtr, map),
        Value::Array(rows) => write_records(&mut wtr, rows),
        other => wtr.write_record([cell(other)]).map_err(Into::into),
    };
    if let Err(e) = outcome.and_then(|_| wtr.flush().map_err(Into::into)) {
        log::error!("could not write CSV output: {}", e);
    }
}

fn write_object<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    map: &Map<String, Value>,
) -> Result<(), csv::Error> {
    wtr.write_record(["field", "value"])?;
    let mut blocks = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(rows) if rows.iter().any(Value::is_object) => blocks.push((key, rows)),
            _ => wtr.write_record([key.as_str(), &cell(val)])?,
        }
    }
    for (key, rows) in blocks {
        wtr.write_record([""])?;
        wtr.write_record([key.as_str()])?;
        write_records(wtr, rows)?;
    }
    Ok(())
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let headers: Vec<String> = match rows.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => {
            for row in rows {
                wtr.write_record([cell(row)])?;
            }
            return Ok(());
        }
    };
    wtr.write_record(&headers)?;
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(cell).unwrap_or_default())
                .collect();
            wtr.write_record(&record)?;
        }
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
