use serde_json::Value;

/// Headline field for each command, in lookup order.
const HEADLINE_KEYS: [&str; 11] = [
    "total_returns",
    "required_monthly",
    "emi",
    "final_amount",
    "total_corpus_needed",
    "total_insurance_need",
    "emergency_fund_needed",
    "tax_saved",
    "score",
    "feasibility",
    "recommendation",
];

/// Print only the headline answer of a command.
///
/// Falls back to the first field of the result when none of the known
/// headline keys is present.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        let headline = HEADLINE_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find(|val| !val.is_null());
        if let Some(val) = headline {
            println!("{}", render(val));
            return;
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, render(val));
            return;
        }
    }

    println!("{}", render(result));
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join("\n"),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
