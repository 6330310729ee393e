use serde_json::Value;
use thiserror::Error;

/// Cell value that does not have the shape its query implies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellValueError {
    #[error("expected a number, got {0}")]
    NotANumber(&'static str),
    #[error("expected an array of rows, got {0}")]
    NotAnArray(&'static str),
    #[error("row {index} has no string id")]
    MissingId { index: usize },
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Amount of an aggregate cell in minor units.
///
/// An absent or null cell is still resolving and yields `None`.
pub fn decode_amount(value: Option<&Value>) -> Result<Option<i64>, CellValueError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(amount) => Ok(Some(amount)),
            None => n
                .as_f64()
                .map(|f| Some(f.round() as i64))
                .ok_or(CellValueError::NotANumber("number")),
        },
        Some(other) => Err(CellValueError::NotANumber(kind(other))),
    }
}

/// Ids of a row-set cell projected to `id`.
///
/// An absent or null cell is an empty set.
pub fn decode_row_ids(value: Option<&Value>) -> Result<Vec<String>, CellValueError> {
    let rows = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(rows)) => rows,
        Some(other) => return Err(CellValueError::NotAnArray(kind(other))),
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.get("id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(CellValueError::MissingId { index })
        })
        .collect()
}
