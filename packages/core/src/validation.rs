use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{QueryPayload, SyncPayload};

/// Errors returned when a sync request body does not have the required shape.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("request body must be valid JSON: {0}")]
    InvalidJson(String),

    #[error("request body must be a JSON object")]
    BodyNotObject,

    #[error("tables is required")]
    MissingTables,

    #[error("tables must be an array of table names, got {0}")]
    TablesNotArray(&'static str),

    #[error("table name at index {0} must be a string")]
    TableNotString(usize),
}

/// Extract a [`QueryPayload`] from a raw request body.
///
/// Never fails. A body that is empty, not JSON, or not an object yields the
/// default payload; a non-string `query` is dropped and a non-array `params`
/// becomes empty.
pub fn parse_query_body(body: &[u8]) -> QueryPayload {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => return QueryPayload::default(),
    };
    let Some(obj) = value.as_object() else {
        return QueryPayload::default();
    };

    QueryPayload {
        query: obj.get("query").and_then(Value::as_str).map(str::to_owned),
        params: match obj.get("params") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        },
    }
}

/// Parse and validate a sync request body.
///
/// Only the body itself and `tables` are checked. `direction` is carried
/// through verbatim whatever its value, and may be absent.
pub fn parse_sync_body(body: &[u8]) -> Result<SyncPayload, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
    let obj = value.as_object().ok_or(ValidationError::BodyNotObject)?;

    let tables = validate_tables(obj)?;

    Ok(SyncPayload {
        direction: obj.get("direction").cloned(),
        tables,
    })
}

fn validate_tables(obj: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
    let items = match obj.get("tables") {
        None | Some(Value::Null) => return Err(ValidationError::MissingTables),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(ValidationError::TablesNotArray(json_kind(other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(ValidationError::TableNotString(i))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Vec<u8> {
        serde_json::to_vec(&v).unwrap()
    }

    #[test]
    fn query_body_extracts_fields() {
        let p = parse_query_body(&body(json!({
            "query": "SELECT * FROM dreams WHERE id = ?",
            "params": [7, "x"]
        })));
        assert_eq!(p.query.as_deref(), Some("SELECT * FROM dreams WHERE id = ?"));
        assert_eq!(p.params, vec![json!(7), json!("x")]);
    }

    #[test]
    fn query_body_tolerates_missing_fields() {
        assert_eq!(parse_query_body(&body(json!({}))), QueryPayload::default());
    }

    #[test]
    fn query_body_tolerates_garbage() {
        assert_eq!(parse_query_body(b""), QueryPayload::default());
        assert_eq!(parse_query_body(b"not json"), QueryPayload::default());
        assert_eq!(parse_query_body(&body(json!([1, 2]))), QueryPayload::default());
    }

    #[test]
    fn query_body_drops_wrongly_typed_fields() {
        let p = parse_query_body(&body(json!({ "query": 42, "params": "nope" })));
        assert!(p.query.is_none());
        assert!(p.params.is_empty());
    }

    #[test]
    fn sync_body_valid() {
        let p = parse_sync_body(&body(json!({
            "direction": "export",
            "tables": ["users", "dreams"]
        })))
        .unwrap();
        assert_eq!(p.direction, Some(json!("export")));
        assert_eq!(p.tables, vec!["users", "dreams"]);
    }

    #[test]
    fn sync_body_empty_tables_is_valid() {
        let p = parse_sync_body(&body(json!({ "direction": "import", "tables": [] }))).unwrap();
        assert!(p.tables.is_empty());
    }

    #[test]
    fn sync_body_keeps_order_and_duplicates() {
        let p = parse_sync_body(&body(json!({
            "direction": "bidirectional",
            "tables": ["b", "a", "b"]
        })))
        .unwrap();
        assert_eq!(p.tables, vec!["b", "a", "b"]);
    }

    #[test]
    fn sync_body_missing_tables() {
        let err = parse_sync_body(&body(json!({ "direction": "export" }))).unwrap_err();
        assert_eq!(err, ValidationError::MissingTables);
        let err =
            parse_sync_body(&body(json!({ "direction": "export", "tables": null }))).unwrap_err();
        assert_eq!(err, ValidationError::MissingTables);
    }

    #[test]
    fn sync_body_tables_not_array() {
        let err = parse_sync_body(&body(json!({ "direction": "export", "tables": "users" })))
            .unwrap_err();
        assert_eq!(err, ValidationError::TablesNotArray("a string"));
        let err = parse_sync_body(&body(json!({ "direction": "export", "tables": { "n": 1 } })))
            .unwrap_err();
        assert_eq!(err, ValidationError::TablesNotArray("an object"));
    }

    #[test]
    fn sync_body_table_not_string() {
        let err = parse_sync_body(&body(json!({
            "direction": "export",
            "tables": ["users", 3]
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::TableNotString(1));
    }

    #[test]
    fn sync_body_passes_any_direction_through() {
        for direction in [json!("both"), json!("sideways"), json!(1), json!({ "from": "a" }), json!(null)] {
            let p = parse_sync_body(&body(json!({ "direction": direction, "tables": ["users"] })))
                .unwrap();
            assert_eq!(p.direction, Some(direction));
            assert_eq!(p.tables, vec!["users"]);
        }
    }

    #[test]
    fn sync_body_tolerates_missing_direction() {
        let p = parse_sync_body(&body(json!({ "tables": ["users"] }))).unwrap();
        assert!(p.direction.is_none());
        assert_eq!(p.tables, vec!["users"]);
    }

    #[test]
    fn sync_body_unknown_direction_does_not_mask_tables_error() {
        let err = parse_sync_body(&body(json!({ "direction": "sideways" }))).unwrap_err();
        assert_eq!(err, ValidationError::MissingTables);
    }

    #[test]
    fn sync_body_rejects_non_json_and_non_object() {
        assert!(matches!(
            parse_sync_body(b"{ tables"),
            Err(ValidationError::InvalidJson(_))
        ));
        assert!(matches!(parse_sync_body(b""), Err(ValidationError::InvalidJson(_))));
        assert_eq!(
            parse_sync_body(&body(json!(["users"]))).unwrap_err(),
            ValidationError::BodyNotObject
        );
    }
}
