use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the object. For a schedule array
/// the level payment of the first period is the headline number.
pub fn print_minimal(value: &Value) {
    // Priority list of key output fields
    let priority_keys = [
        "payment",
        "principal_balance",
        "monthly_payment",
        "aggregate_principal_paid",
        "aggregate_interest_paid",
    ];

    match value {
        Value::Object(map) => {
            // Try priority keys first (skip null values)
            for key in &priority_keys {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }

            // Fall back to first field
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
            }
        }
        Value::Array(arr) => {
            if let Some(Value::Object(first)) = arr.first() {
                if let Some(val) = first.get("monthly_payment") {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
            println!("{} rows", arr.len());
        }
        _ => println!("{}", format_minimal(value)),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
