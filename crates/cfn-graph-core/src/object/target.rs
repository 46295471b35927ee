use crate::error::CoreError;
use crate::object::raw::RawObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of a resource definition a change touches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Attribute {
    Properties,
    Metadata,
    CreationPolicy,
    UpdatePolicy,
    DeletionPolicy,
    Tags,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Metadata => "Metadata",
            Self::CreationPolicy => "CreationPolicy",
            Self::UpdatePolicy => "UpdatePolicy",
            Self::DeletionPolicy => "DeletionPolicy",
            Self::Tags => "Tags",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether changing the target forces the resource to be recreated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RequiresRecreation {
    Never,
    Conditionally,
    Always,
}

impl RequiresRecreation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Conditionally => "Conditionally",
            Self::Always => "Always",
        }
    }
}

impl fmt::Display for RequiresRecreation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The field CloudFormation will change on a resource (`ResourceTargetDefinition`).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTargetDefinition {
    /// Logical id of the resource this target belongs to. Not part of the
    /// AWS payload; attached while parsing.
    #[serde(skip)]
    pub resource_id: String,
    pub attribute: Attribute,
    /// Property name; only set when `attribute` is `Properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub requires_recreation: RequiresRecreation,
}

impl ResourceTargetDefinition {
    pub(crate) fn parse(value: &serde_json::Value, resource_id: &str) -> Result<Self, CoreError> {
        let raw = RawObject::new("ResourceTargetDefinition", value)?;
        Ok(Self {
            resource_id: resource_id.to_string(),
            attribute: raw.enum_field("Attribute")?,
            name: raw.opt_string("Name")?,
            requires_recreation: raw.enum_field("RequiresRecreation")?,
        })
    }

    /// The property name for `Properties` targets, otherwise the attribute.
    pub fn node_name(&self) -> &str {
        match (self.attribute, &self.name) {
            (Attribute::Properties, Some(name)) => name.as_str(),
            (attribute, _) => attribute.as_str(),
        }
    }

    /// Graph id, unique within the owning resource's cluster.
    pub fn node_id(&self) -> String {
        format!("{}-{}", self.resource_id, self.node_name())
    }
}
