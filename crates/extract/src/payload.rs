use serde::Deserialize;
use serde_json::Value;

/// Aggregated cost response body: `{ monthly?: Row[], quarterly?: Row[] }`.
///
/// Rows are kept as raw JSON because their shape is not fixed; the server
/// may also attach extra fields (e.g. a `sample` preview), which are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostPayload {
    #[serde(default)]
    pub monthly: Vec<Value>,
    #[serde(default)]
    pub quarterly: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arrays_default_to_empty() {
        let payload: CostPayload = serde_json::from_str("{}").expect("payload");
        assert!(payload.monthly.is_empty());
        assert!(payload.quarterly.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"monthly":[{"month":"2025-01","_cost":15.0}],"sample":[{"UsageDate":"2025-01-15"}]}"#;
        let payload: CostPayload = serde_json::from_str(body).expect("payload");
        assert_eq!(payload.monthly.len(), 1);
        assert!(payload.quarterly.is_empty());
    }

    #[test]
    fn rows_keep_server_order() {
        let body = r#"{"quarterly":[{"quarter":"2025Q2","_cost":40.0},{"quarter":"2025Q1","_cost":35.0}]}"#;
        let payload: CostPayload = serde_json::from_str(body).expect("payload");
        let quarters: Vec<&str> = payload
            .quarterly
            .iter()
            .filter_map(|row| row.get("quarter").and_then(|value| value.as_str()))
            .collect();
        assert_eq!(quarters, vec!["2025Q2", "2025Q1"]);
    }
}
