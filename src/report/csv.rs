// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CSV rendering of metric rows

use serde_json::Value;

/// Render rows as CSV. The header is the key order of the first row.
pub fn format_csv(rows: &[Value]) -> String {
    let Some(Value::Object(first)) = rows.first() else {
        return String::new();
    };

    let headers: Vec<&String> = first.keys().collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| csv_escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|key| row.get(key.as_str()).map(format_csv_value).unwrap_or_default())
            .collect();
        lines.push(cells.join(","));
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

/// Format a JSON value for CSV.
pub fn format_csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => csv_escape(s),
        Value::Array(_) | Value::Object(_) => {
            csv_escape(&serde_json::to_string(value).unwrap_or_default())
        }
    }
}

/// Escape a string for CSV (quote if contains comma, quote, or newline).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
