use costboard_core::Series;
use serde_json::Value;

fn value_to_f64(value: &Value) -> Option<f64> {
    if let Some(value) = value.as_f64() {
        return Some(value);
    }
    if let Some(value) = value.as_i64() {
        return Some(value as f64);
    }
    if let Some(value) = value.as_u64() {
        return Some(value as f64);
    }
    if let Some(value) = value.as_str() {
        return value.parse::<f64>().ok();
    }
    None
}

// Truthiness of a numeric candidate: zero and NaN fall through to the
// next fallback.
fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// The value at ordinal key position 1, whatever key that happens to be.
/// Relies on the row map preserving insertion order.
fn second_field(row: &Value) -> Option<&Value> {
    row.as_object().and_then(|map| map.values().nth(1))
}

/// Cost of one uploaded-data row.
///
/// `_cost` wins whenever it is numeric, zero included; otherwise the
/// second field by position, but only when truthy; otherwise `0`.
pub fn upload_cost_value(row: &Value) -> f64 {
    if let Some(cost) = row.get("_cost").and_then(value_to_f64) {
        return cost;
    }
    second_field(row)
        .and_then(value_to_f64)
        .filter(|value| truthy(*value))
        .unwrap_or(0.0)
}

/// Cost of one sample-data row.
///
/// Unlike [`upload_cost_value`], every link of this chain treats zero as
/// falsy: `_cost`, then `cost`, then the second field by position, then
/// `0`. The divergence is inherited behavior and deliberately kept.
pub fn sample_cost_value(row: &Value) -> f64 {
    row.get("_cost")
        .and_then(value_to_f64)
        .filter(|value| truthy(*value))
        .or_else(|| {
            row.get("cost")
                .and_then(value_to_f64)
                .filter(|value| truthy(*value))
        })
        .or_else(|| {
            second_field(row)
                .and_then(value_to_f64)
                .filter(|value| truthy(*value))
        })
        .unwrap_or(0.0)
}

/// The time-bucket label under `primary_key` (`month` or `quarter`).
/// Numbers are stringified; a missing or unusable field yields `None`,
/// never an error.
pub fn bucket_label(row: &Value, primary_key: &str) -> Option<String> {
    let value = row.get(primary_key)?;
    if let Some(text) = value.as_str() {
        return Some(text.to_string());
    }
    if let Some(number) = value.as_i64() {
        return Some(number.to_string());
    }
    if let Some(number) = value.as_f64() {
        return Some(number.to_string());
    }
    None
}

fn series_with(rows: &[Value], primary_key: &str, cost_of: fn(&Value) -> f64) -> Series {
    rows.iter()
        .map(|row| {
            let label = bucket_label(row, primary_key).unwrap_or_default();
            (label, cost_of(row))
        })
        .collect()
}

/// Build a series from upload-response rows, in row order.
pub fn upload_series(rows: &[Value], primary_key: &str) -> Series {
    series_with(rows, primary_key, upload_cost_value)
}

/// Build a series from sample-data rows, in row order.
pub fn sample_series(rows: &[Value], primary_key: &str) -> Series {
    series_with(rows, primary_key, sample_cost_value)
}
