//! Canonical bytes for fingerprinting graphs.

use crate::error::CoreError;
use crate::hash::Fingerprint;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `tag\0json`, with every object's keys sorted.
///
/// Arrays keep their order: node, edge and cluster order is part of what a
/// graph means, so reordering them must change the fingerprint.
pub fn canonical_serialize(tag: &str, value: &impl Serialize) -> Result<Vec<u8>, CoreError> {
    let json = serde_json::to_string(&sorted(serde_json::to_value(value)?))?;
    let mut bytes = Vec::with_capacity(tag.len() + 1 + json.len());
    bytes.extend_from_slice(tag.as_bytes());
    bytes.push(0);
    bytes.extend_from_slice(json.as_bytes());
    Ok(bytes)
}

pub fn content_hash(tag: &str, value: &impl Serialize) -> Result<Fingerprint, CoreError> {
    Ok(Fingerprint::of_bytes(&canonical_serialize(tag, value)?))
}

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sorted(v))).collect();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        scalar => scalar,
    }
}
