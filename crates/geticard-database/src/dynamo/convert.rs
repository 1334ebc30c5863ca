//! Conversion between JSON records and DynamoDB attribute maps.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Number, Value};

use geticard_core::error::AppError;
use geticard_core::result::AppResult;
use geticard_core::types::record::Item;

/// Convert a JSON record into a DynamoDB item.
pub fn item_to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, value_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item into a JSON record.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> AppResult<Item> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_value(value)?)))
        .collect()
}

fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(k, v)| (k, value_to_attribute(v)))
                .collect(),
        ),
    }
}

fn attribute_to_value(attribute: &AttributeValue) -> AppResult<Value> {
    let value = match attribute {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_value(n)?,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(
            items
                .iter()
                .map(attribute_to_value)
                .collect::<AppResult<Vec<_>>>()?,
        ),
        AttributeValue::M(map) => Value::Object(attributes_to_item(map)?),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(
            set.iter()
                .map(|n| number_to_value(n))
                .collect::<AppResult<Vec<_>>>()?,
        ),
        AttributeValue::B(blob) => Value::String(encode_blob(blob)),
        AttributeValue::Bs(set) => {
            Value::Array(set.iter().map(|b| Value::String(encode_blob(b))).collect())
        }
        _ => return Err(AppError::database("Unsupported DynamoDB attribute type")),
    };
    Ok(value)
}

fn number_to_value(n: &str) -> AppResult<Value> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| AppError::database(format!("Invalid DynamoDB number: {n}")))
}

fn encode_blob(blob: &Blob) -> String {
    STANDARD.encode(blob.as_ref())
}
