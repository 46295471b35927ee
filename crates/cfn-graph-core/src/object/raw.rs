//! Field access over the untyped `DescribeChangeSet` document.
//!
//! Every accessor reports failures against the entity being built, so an
//! error always names both the containing record and the offending field.

use crate::error::CoreError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JSON object viewed as one payload entity (`ChangeSet`, `Parameter`, ...).
pub(crate) struct RawObject<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> RawObject<'a> {
    pub fn new(entity: &'static str, value: &'a Value) -> Result<Self, CoreError> {
        let map = value.as_object().ok_or(CoreError::InvalidFieldType {
            entity,
            field: "<root>",
            expected: "an object",
        })?;
        Ok(Self { entity, map })
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Look up an optional field. JSON `null` counts as absent.
    pub fn get(&self, field: &'static str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    pub fn required(&self, field: &'static str) -> Result<&'a Value, CoreError> {
        self.get(field).ok_or(CoreError::MissingField {
            entity: self.entity,
            field,
        })
    }

    pub fn str(&self, field: &'static str) -> Result<&'a str, CoreError> {
        let value = self.required(field)?;
        self.as_str(field, value)
    }

    pub fn opt_str(&self, field: &'static str) -> Result<Option<&'a str>, CoreError> {
        self.get(field).map(|v| self.as_str(field, v)).transpose()
    }

    pub fn string(&self, field: &'static str) -> Result<String, CoreError> {
        self.str(field).map(str::to_string)
    }

    pub fn opt_string(&self, field: &'static str) -> Result<Option<String>, CoreError> {
        Ok(self.opt_str(field)?.map(str::to_string))
    }

    pub fn opt_bool(&self, field: &'static str) -> Result<Option<bool>, CoreError> {
        self.get(field)
            .map(|v| v.as_bool().ok_or_else(|| self.wrong_type(field, "a boolean")))
            .transpose()
    }

    pub fn u64(&self, field: &'static str) -> Result<u64, CoreError> {
        self.required(field)?
            .as_u64()
            .ok_or_else(|| self.wrong_type(field, "a non-negative integer"))
    }

    pub fn array(&self, field: &'static str) -> Result<&'a [Value], CoreError> {
        let value = self.required(field)?;
        self.as_array(field, value)
    }

    pub fn opt_array(&self, field: &'static str) -> Result<Option<&'a [Value]>, CoreError> {
        self.get(field).map(|v| self.as_array(field, v)).transpose()
    }

    /// Array of plain strings (e.g. `NotificationARNs`).
    pub fn strings(&self, field: &'static str) -> Result<Vec<String>, CoreError> {
        self.array(field)?
            .iter()
            .map(|v| self.as_str(field, v).map(str::to_string))
            .collect()
    }

    pub fn enum_field<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, CoreError> {
        let raw = self.str(field)?;
        self.parse_enum(field, raw)
    }

    pub fn opt_enum<T: DeserializeOwned>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, CoreError> {
        self.opt_str(field)?
            .map(|raw| self.parse_enum(field, raw))
            .transpose()
    }

    /// Array of enum values (e.g. `Capabilities`, `Scope`).
    pub fn enums<T: DeserializeOwned>(&self, field: &'static str) -> Result<Vec<T>, CoreError> {
        self.array(field)?
            .iter()
            .map(|v| self.as_str(field, v).and_then(|raw| self.parse_enum(field, raw)))
            .collect()
    }

    /// Closed value sets are declared with serde renames, so deserializing
    /// the bare string is the membership test.
    fn parse_enum<T: DeserializeOwned>(&self, field: &'static str, raw: &str) -> Result<T, CoreError> {
        serde_json::from_value(Value::String(raw.to_string())).map_err(|_| {
            CoreError::UnknownEnumValue {
                entity: self.entity,
                field,
                value: raw.to_string(),
            }
        })
    }

    fn as_str(&self, field: &'static str, value: &'a Value) -> Result<&'a str, CoreError> {
        value.as_str().ok_or_else(|| self.wrong_type(field, "a string"))
    }

    fn as_array(&self, field: &'static str, value: &'a Value) -> Result<&'a [Value], CoreError> {
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.wrong_type(field, "an array"))
    }

    fn wrong_type(&self, field: &'static str, expected: &'static str) -> CoreError {
        CoreError::InvalidFieldType {
            entity: self.entity,
            field,
            expected,
        }
    }
}
