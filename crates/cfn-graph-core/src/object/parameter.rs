use crate::error::CoreError;
use crate::object::raw::RawObject;
use serde::Serialize;

/// A template parameter as supplied to the change set.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    pub parameter_key: String,
    pub parameter_value: String,
    /// Set for SSM-backed parameters whose value is resolved at deploy time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
    pub use_previous_value: bool,
}

impl Parameter {
    pub(crate) fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("Parameter", value)?;
        Ok(Self {
            parameter_key: raw.string("ParameterKey")?,
            parameter_value: raw.string("ParameterValue")?,
            resolved_value: raw.opt_string("ResolvedValue")?,
            use_previous_value: raw.opt_bool("UsePreviousValue")?.unwrap_or(false),
        })
    }

    pub fn node_id(&self) -> &str {
        &self.parameter_key
    }

    /// `value`, or `value ⇒ resolved` when resolution produced something else.
    pub fn display_value(&self) -> String {
        match &self.resolved_value {
            Some(resolved) if resolved != &self.parameter_value => {
                format!("{} ⇒ {}", self.parameter_value, resolved)
            }
            _ => self.parameter_value.clone(),
        }
    }
}
