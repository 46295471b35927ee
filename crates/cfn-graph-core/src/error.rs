use crate::object::{Action, Replacement};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("change sets with multiple pages are not supported (NextToken present)")]
    UnsupportedPagination,

    #[error("{entity}: missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: field '{field}' must be {expected}")]
    InvalidFieldType {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{entity}: unknown value '{value}' for field '{field}'")]
    UnknownEnumValue {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("{entity}: duplicate key '{key}'")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("parameter '{0}' uses its previous value but is referenced as a change cause")]
    InvalidParameterState(String),

    #[error("resource '{resource}': no color rule for action {action} with replacement {replacement:?}")]
    UnhandledReplacementState {
        resource: String,
        action: Action,
        replacement: Option<Replacement>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
