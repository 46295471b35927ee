use crate::causality;
use crate::error::CoreError;
use crate::object::parameter::Parameter;
use crate::object::raw::RawObject;
use crate::object::resource_change::{Action, Change};
use crate::object::rollback::{RollbackConfiguration, Tag};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Capability {
    #[serde(rename = "CAPABILITY_IAM")]
    Iam,
    #[serde(rename = "CAPABILITY_NAMED_IAM")]
    NamedIam,
    #[serde(rename = "CAPABILITY_AUTO_EXPAND")]
    AutoExpand,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iam => "CAPABILITY_IAM",
            Self::NamedIam => "CAPABILITY_NAMED_IAM",
            Self::AutoExpand => "CAPABILITY_AUTO_EXPAND",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the change set can be executed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Unavailable,
    Available,
    ExecuteInProgress,
    ExecuteComplete,
    ExecuteFailed,
    Obsolete,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "UNAVAILABLE",
            Self::Available => "AVAILABLE",
            Self::ExecuteInProgress => "EXECUTE_IN_PROGRESS",
            Self::ExecuteComplete => "EXECUTE_COMPLETE",
            Self::ExecuteFailed => "EXECUTE_FAILED",
            Self::Obsolete => "OBSOLETE",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of the change set itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    CreatePending,
    CreateInProgress,
    CreateComplete,
    DeletePending,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatePending => "CREATE_PENDING",
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::DeletePending => "DELETE_PENDING",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `DescribeChangeSet` response.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeSet {
    /// ARN of the change set.
    pub change_set_id: String,
    pub change_set_name: String,
    /// ARN of the stack the change set belongs to.
    pub stack_id: String,
    pub stack_name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_status: Option<ExecutionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    pub creation_time: DateTime<Utc>,
    /// Capabilities explicitly acknowledged when the change set was created.
    pub capabilities: Vec<Capability>,
    #[serde(rename = "NotificationARNs")]
    pub notification_arns: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub changes: Vec<Change>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_configuration: Option<RollbackConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ChangeSet {
    /// Build the typed model from a decoded API response.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("ChangeSet", value)?;
        if raw.contains("NextToken") {
            return Err(CoreError::UnsupportedPagination);
        }

        let parameters = raw
            .array("Parameters")?
            .iter()
            .map(Parameter::parse)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique("Parameter", parameters.iter().map(|p| p.parameter_key.as_str()))?;

        let changes = raw
            .array("Changes")?
            .iter()
            .map(Change::parse)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(
            "ResourceChange",
            changes
                .iter()
                .map(|c| c.resource_change.logical_resource_id.as_str()),
        )?;

        // Presence is decided on the raw key, before the value is parsed.
        let execution_status = if raw.contains("ExecutionStatus") {
            raw.opt_enum("ExecutionStatus")?
        } else {
            None
        };

        Ok(Self {
            change_set_id: raw.string("ChangeSetId")?,
            change_set_name: raw.string("ChangeSetName")?,
            stack_id: raw.string("StackId")?,
            stack_name: raw.string("StackName")?,
            status: raw.enum_field("Status")?,
            execution_status,
            status_reason: raw.opt_string("StatusReason")?,
            creation_time: parse_timestamp(raw.str("CreationTime")?)?,
            capabilities: raw.enums("Capabilities")?,
            notification_arns: raw.strings("NotificationARNs")?,
            parameters,
            changes,
            rollback_configuration: raw
                .get("RollbackConfiguration")
                .map(RollbackConfiguration::parse)
                .transpose()?,
            tags: raw
                .opt_array("Tags")?
                .map(|tags| tags.iter().map(Tag::parse).collect::<Result<Vec<_>, _>>())
                .transpose()?,
        })
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        Self::from_value(&value)
    }

    /// Parameters that cause at least one change, in declaration order.
    pub fn causing_parameters(&self) -> Result<Vec<&Parameter>, CoreError> {
        causality::causing_parameters(self)
    }

    /// Number of resource changes per action, in `Action` declaration order.
    pub fn action_counts(&self) -> Vec<(Action, usize)> {
        [Action::Add, Action::Modify, Action::Remove, Action::Import]
            .into_iter()
            .map(|action| {
                let count = self
                    .changes
                    .iter()
                    .filter(|c| c.resource_change.action == action)
                    .count();
                (action, count)
            })
            .collect()
    }
}

impl FromStr for ChangeSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

/// Parse an extended ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 (including a trailing `Z`) and offset-less timestamps,
/// which are taken to be UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidTimestamp(s.to_string()))
}

fn ensure_unique<'a>(
    entity: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CoreError::DuplicateKey {
                entity,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
