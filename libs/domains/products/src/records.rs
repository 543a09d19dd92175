//! Conversion of stored documents into JSON response records.
//!
//! Store records are schema-flexible, so they are returned as JSON objects
//! rather than [`Product`]s. The native `_id` becomes a string `id` and
//! datetimes become RFC 3339 strings.

use database::mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// A product as returned by `GET /api/products`
pub type ProductRecord = Map<String, Value>;

/// Render a store-assigned identifier as a string
///
/// ObjectIds become their 24-character hex form.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a stored document into a response record
pub fn from_document(document: Document) -> ProductRecord {
    document
        .into_iter()
        .map(|(key, value)| {
            if key == "_id" {
                ("id".to_string(), Value::String(id_to_string(&value)))
            } else {
                (key, bson_to_json(value))
            }
        })
        .collect()
}

/// Convert a [`Product`] into a response record (no `id`)
pub fn from_product(product: &Product) -> ProductResult<ProductRecord> {
    match serde_json::to_value(product) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ProductError::Serialization(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(ProductError::Serialization(e.to_string())),
    }
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(i) => Value::from(i),
        Bson::Int64(i) => Value::from(i),
        Bson::Double(f) => Value::from(f),
        Bson::String(s) => Value::String(s),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.to_string()),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(k, v)| (k, bson_to_json(v)))
                .collect(),
        ),
        other => other.into_relaxed_extjson(),
    }
}
