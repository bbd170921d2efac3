use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Converts one stored document into its response shape: the internal
/// `_id` becomes a public string `id`, datetimes become RFC3339 text,
/// everything else passes through. The input is never mutated.
pub fn to_serializable(doc: &Document) -> Value {
    let mut out = Map::new();
    if let Ok(oid) = doc.get_object_id("_id") {
        out.insert("id".to_string(), Value::String(oid.to_hex()));
    }
    for (key, value) in doc {
        if key == "_id" {
            continue;
        }
        out.insert(key.clone(), bson_to_json(value));
    }
    Value::Object(out)
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(
            doc.iter()
                .map(|(k, v)| (k.clone(), bson_to_json(v)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Null => Value::Null,
        Bson::Int32(n) => Value::from(*n),
        Bson::Int64(n) => Value::from(*n),
        Bson::Double(f) => Value::from(*f),
        other => other.clone().into_relaxed_extjson(),
    }
}
