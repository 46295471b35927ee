use crate::error::CoreError;
use crate::object::raw::RawObject;
use crate::object::target::ResourceTargetDefinition;
use serde::{Deserialize, Serialize};

/// What triggered a detail's change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChangeSource {
    /// `Ref` to another resource in the template.
    ResourceReference,
    /// `Ref` to a template parameter.
    ParameterReference,
    /// `Fn::GetAtt` on another resource.
    ResourceAttribute,
    /// An edit to the template itself.
    DirectModification,
    /// Always-triggered updates, e.g. nested `AWS::CloudFormation::Stack`.
    Automatic,
}

impl ChangeSource {
    /// Sources that name a concrete causing entity in the payload.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::ResourceReference | Self::ParameterReference | Self::ResourceAttribute
        )
    }
}

/// Whether CloudFormation knows the target's new value up front.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Evaluation {
    Static,
    Dynamic,
}

/// How a detail's cause shows up in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause<'a> {
    /// The change happens but no stable entity can be blamed for it.
    Suppressed,
    /// The template text itself was edited.
    Template,
    /// An edge is drawn from this entity id.
    Entity(&'a str),
}

/// One changed field on a modified resource (`ResourceChangeDetail`).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceChangeDetail {
    #[serde(skip)]
    pub resource_id: String,
    pub change_source: ChangeSource,
    pub evaluation: Evaluation,
    /// Absent for `DirectModification`, and usually for `Automatic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causing_entity: Option<String>,
    pub target: ResourceTargetDefinition,
}

impl ResourceChangeDetail {
    pub(crate) fn parse(value: &serde_json::Value, resource_id: &str) -> Result<Self, CoreError> {
        let raw = RawObject::new("ResourceChangeDetail", value)?;
        let change_source: ChangeSource = raw.enum_field("ChangeSource")?;
        let evaluation = raw.enum_field("Evaluation")?;
        let causing_entity = raw.opt_string("CausingEntity")?;
        if change_source.is_reference() && causing_entity.is_none() {
            return Err(CoreError::MissingField {
                entity: "ResourceChangeDetail",
                field: "CausingEntity",
            });
        }
        let target = ResourceTargetDefinition::parse(raw.required("Target")?, resource_id)?;
        Ok(Self {
            resource_id: resource_id.to_string(),
            change_source,
            evaluation,
            causing_entity,
            target,
        })
    }

    /// Classify this detail as suppressed, template-caused or directly caused.
    pub fn cause(&self) -> Cause<'_> {
        match (self.change_source, self.evaluation, self.causing_entity.as_deref()) {
            (ChangeSource::DirectModification, Evaluation::Dynamic, _) => Cause::Suppressed,
            (ChangeSource::DirectModification, Evaluation::Static, _) => Cause::Template,
            (_, _, Some(entity)) => Cause::Entity(entity),
            // Automatic changes without a named entity have nothing to point at.
            (_, _, None) => Cause::Suppressed,
        }
    }
}
