//! Conversions to and from `serde_json::Value`.

use serde_json::{Map, Value};

use crate::csv::Csv;
use crate::error::{Error, Result};
use crate::properties::Properties;

/// One JSON object per row, keyed by the logical header in header order.
pub fn csv_to_json(csv: &Csv) -> Value {
    let rows = (0..csv.len())
        .map(|row| {
            let obj: Map<String, Value> = csv
                .header()
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let v = csv.value(row, col).unwrap_or_default();
                    (name.clone(), Value::String(v.to_string()))
                })
                .collect();
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

pub fn properties_to_json(props: &Properties) -> Value {
    Value::Object(
        props
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

/// Builds properties from a flat JSON object.
///
/// Strings are taken as is, numbers and booleans in their JSON spelling and
/// `null` as an empty value. Arrays, nested objects and non-object input are
/// rejected.
pub fn properties_from_json(value: &Value) -> Result<Properties> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::Message("expected a JSON object of properties".to_string()))?;
    obj.iter()
        .map(|(k, v)| {
            let s = match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                Value::Bool(_) | Value::Number(_) => v.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::Message(format!("property '{k}' is not a scalar")));
                }
            };
            Ok((k.clone(), s))
        })
        .collect()
}
