use crate::error::CoreError;
use crate::object::detail::ResourceChangeDetail;
use crate::object::raw::RawObject;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Modify,
    Remove,
    Import,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Modify => "Modify",
            Self::Remove => "Remove",
            Self::Import => "Import",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a `Modify` replaces the physical resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Replacement {
    True,
    False,
    Conditional,
}

impl Replacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Conditional => "Conditional",
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Scope {
    Properties,
    Metadata,
    CreationPolicy,
    UpdatePolicy,
    DeletionPolicy,
    Tags,
}

/// The resource and the action CloudFormation will perform on it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceChange {
    pub action: Action,
    pub logical_resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    /// Only meaningful when `action` is `Modify`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,
    pub resource_type: String,
    pub scope: Vec<Scope>,
    /// Populated for `Modify` only; empty otherwise.
    pub details: Vec<ResourceChangeDetail>,
}

impl ResourceChange {
    pub(crate) fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("ResourceChange", value)?;
        let logical_resource_id = raw.string("LogicalResourceId")?;
        let details = raw
            .opt_array("Details")?
            .unwrap_or_default()
            .iter()
            .map(|d| ResourceChangeDetail::parse(d, &logical_resource_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            action: raw.enum_field("Action")?,
            physical_resource_id: raw.opt_string("PhysicalResourceId")?,
            replacement: raw.opt_enum("Replacement")?,
            resource_type: raw.string("ResourceType")?,
            scope: raw.enums("Scope")?,
            details,
            logical_resource_id,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Resource,
}

/// One entry of the change set's `Changes` list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    #[serde(rename = "Type")]
    pub change_type: ChangeType,
    pub resource_change: ResourceChange,
}

impl Change {
    pub(crate) fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw = RawObject::new("Change", value)?;
        Ok(Self {
            change_type: raw.enum_field("Type")?,
            resource_change: ResourceChange::parse(raw.required("ResourceChange")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_modify_with_details() {
        let rc = ResourceChange::parse(&json!({
            "Action": "Modify",
            "LogicalResourceId": "WebServer",
            "PhysicalResourceId": "i-0abc",
            "Replacement": "Conditional",
            "ResourceType": "AWS::EC2::Instance",
            "Scope": ["Properties"],
            "Details": [{
                "ChangeSource": "ParameterReference",
                "Evaluation": "Static",
                "CausingEntity": "Env",
                "Target": {"Attribute": "Properties", "Name": "InstanceType", "RequiresRecreation": "Always"}
            }]
        }))
        .unwrap();
        assert_eq!(rc.action, Action::Modify);
        assert_eq!(rc.replacement, Some(Replacement::Conditional));
        assert_eq!(rc.details.len(), 1);
        assert_eq!(rc.details[0].resource_id, "WebServer");
        assert_eq!(rc.details[0].target.resource_id, "WebServer");
    }

    #[test]
    fn add_without_details_or_replacement() {
        let rc = ResourceChange::parse(&json!({
            "Action": "Add",
            "LogicalResourceId": "Queue",
            "ResourceType": "AWS::SQS::Queue",
            "Scope": []
        }))
        .unwrap();
        assert_eq!(rc.replacement, None);
        assert_eq!(rc.physical_resource_id, None);
        assert!(rc.details.is_empty());
    }

    #[test]
    fn missing_logical_id_fails() {
        let err = ResourceChange::parse(&json!({
            "Action": "Add",
            "ResourceType": "AWS::SQS::Queue",
            "Scope": []
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingField {
                entity: "ResourceChange",
                field: "LogicalResourceId"
            }
        ));
    }

    #[test]
    fn unknown_scope_fails() {
        let err = ResourceChange::parse(&json!({
            "Action": "Modify",
            "LogicalResourceId": "Queue",
            "ResourceType": "AWS::SQS::Queue",
            "Scope": ["Everything"]
        }))
        .unwrap_err();
        assert!(matches!(err, CoreError::UnknownEnumValue { field: "Scope", .. }));
    }

    #[test]
    fn unknown_change_type_fails() {
        let err = Change::parse(&json!({
            "Type": "Hook",
            "ResourceChange": {}
        }))
        .unwrap_err();
        assert!(matches!(err, CoreError::UnknownEnumValue { field: "Type", .. }));
    }
}
