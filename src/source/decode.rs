//! Decoding of upstream JSON arrays into chart records
//!
//! The upstream serialises SQL sums inconsistently: totals show up as
//! integers, as floats, or as numeric strings depending on the driver.
//! Labels are strings except for hours, which may be bare integers.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::FetchError;
use crate::models::{ChartQuery, ChartRecord, ChartResult};

use super::trait_def::FetchResult;

pub fn decode_records(query: &ChartQuery, body: &Value) -> FetchResult<ChartResult> {
    let rows = body
        .as_array()
        .ok_or_else(|| FetchError::Decode("expected a JSON array".to_string()))?;

    let label_field = query.label_field();
    let total_field = query.total_field();

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let object = row.as_object().ok_or_else(|| {
                FetchError::Decode(format!("row {index} is not a JSON object"))
            })?;
            decode_row(object, index, label_field, total_field)
        })
        .collect()
}

fn decode_row(
    row: &Map<String, Value>,
    index: usize,
    label_field: &str,
    total_field: &str,
) -> FetchResult<ChartRecord> {
    let label = match row.get(label_field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(FetchError::Decode(format!(
                "row {index}: field '{label_field}' has unsupported value {other}"
            )))
        }
        None => {
            return Err(FetchError::Decode(format!(
                "row {index}: missing field '{label_field}'"
            )))
        }
    };

    let total = match row.get(total_field) {
        // SQL SUM over no rows
        Some(Value::Null) => {
            debug!(row = index, field = total_field, "null total read as zero");
            0
        }
        Some(value) => decode_total(value).ok_or_else(|| {
            FetchError::Decode(format!(
                "row {index}: field '{total_field}' is not a non-negative number: {value}"
            ))
        })?,
        None => {
            return Err(FetchError::Decode(format!(
                "row {index}: missing field '{total_field}'"
            )))
        }
    };

    Ok(ChartRecord { label, total })
}

fn decode_total(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(float_total)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_total))
        }
        _ => None,
    }
}

fn float_total(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        Some(value.round() as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupBy;
    use serde_json::json;

    #[test]
    fn test_decode_grouped_totals() {
        let query = ChartQuery::grouped(GroupBy::Archive);
        let body = json!([
            {"archive": "cs", "data": 120},
            {"archive": "math", "data": 80}
        ]);

        let records = decode_records(&query, &body).unwrap();
        assert_eq!(
            records,
            vec![ChartRecord::new("cs", 120), ChartRecord::new("math", 80)]
        );
    }

    #[test]
    fn test_decode_accepts_numeric_hours_and_decimal_strings() {
        let query = ChartQuery::hourly("UTC", None);
        let body = json!([
            {"hour": 0, "total_primary": "1520"},
            {"hour": 1, "total_primary": 980.0},
            {"hour": 2, "total_primary": "12.6"}
        ]);

        let records = decode_records(&query, &body).unwrap();
        assert_eq!(records[0], ChartRecord::new("0", 1520));
        assert_eq!(records[1], ChartRecord::new("1", 980));
        assert_eq!(records[2], ChartRecord::new("2", 13));
    }

    #[test]
    fn test_decode_preserves_upstream_order() {
        let query = ChartQuery::monthly();
        let body = json!([
            {"time_group": "2024-02-01", "total_sum": 2},
            {"time_group": "2023-12-01", "total_sum": 1}
        ]);

        let labels: Vec<String> = decode_records(&query, &body)
            .unwrap()
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(labels, vec!["2024-02-01", "2023-12-01"]);
    }

    #[test]
    fn test_decode_null_total_is_zero() {
        let query = ChartQuery::grouped(GroupBy::Archive);
        let body = json!([{"archive": "q-bio", "data": null}]);

        assert_eq!(
            decode_records(&query, &body).unwrap(),
            vec![ChartRecord::new("q-bio", 0)]
        );
    }

    #[test]
    fn test_decode_rejects_negative_totals() {
        let query = ChartQuery::grouped(GroupBy::Country);
        let body = json!([{"country": "France", "data": -4}]);

        let err = decode_records(&query, &body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_non_array_body() {
        let query = ChartQuery::grouped(GroupBy::Country);
        let body = json!({"error": "Internal server error"});

        assert!(matches!(
            decode_records(&query, &body),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_reports_missing_label() {
        let query = ChartQuery::grouped(GroupBy::Category);
        let body = json!([{"archive": "cs", "data": 1}]);

        match decode_records(&query, &body) {
            Err(FetchError::Decode(msg)) => assert!(msg.contains("category")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_array() {
        let query = ChartQuery::hourly("UTC", None);
        assert!(decode_records(&query, &json!([])).unwrap().is_empty());
    }
}
