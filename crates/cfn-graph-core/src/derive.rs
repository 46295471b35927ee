//! Graph derivation: turns a parsed change set into an [`AbstractGraph`].
//!
//! Every resource change becomes either an opaque node (add, remove, import)
//! or a cluster of target nodes (modify). Each detail of a modified resource
//! is classified by [`ResourceChangeDetail::cause`] and contributes at most one
//! edge. Causing parameters are emitted last as standalone nodes.

use crate::error::CoreError;
use crate::graph::{AbstractGraph, Cluster, Color, GraphBuilder, Node, Shape};
use crate::label::{label_table, Label};
use crate::object::{
    Action, Cause, ChangeSet, Parameter, Replacement, RequiresRecreation, ResourceChange,
    ResourceChangeDetail,
};
use tracing::{debug, info};

/// Derive the abstract graph for a change set.
pub fn derive(change_set: &ChangeSet) -> Result<AbstractGraph, CoreError> {
    let mut builder = GraphBuilder::new(format!(
        "Graph for {} on {}",
        change_set.change_set_name, change_set.stack_name
    ));

    for change in &change_set.changes {
        add_resource(&mut builder, &change.resource_change)?;
    }

    for parameter in change_set.causing_parameters()? {
        builder.add_node(parameter_node(parameter));
    }

    let graph = builder.finish();
    info!(
        change_set = %change_set.change_set_name,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        clusters = graph.clusters.len(),
        "derived change set graph"
    );
    Ok(graph)
}

/// Border color of a resource, by action and replacement.
pub fn resource_color(resource: &ResourceChange) -> Result<Color, CoreError> {
    match (resource.action, resource.replacement) {
        (Action::Add, _) => Ok(Color::Green),
        (Action::Remove, _) => Ok(Color::Red),
        (Action::Import, _) => Ok(Color::Blue),
        (Action::Modify, Some(Replacement::False)) => Ok(Color::Green),
        (Action::Modify, Some(Replacement::Conditional)) => Ok(Color::Orange),
        (Action::Modify, Some(Replacement::True)) => Ok(Color::Red),
        (Action::Modify, None) => Err(CoreError::UnhandledReplacementState {
            resource: resource.logical_resource_id.clone(),
            action: resource.action,
            replacement: resource.replacement,
        }),
    }
}

pub fn recreation_color(requires_recreation: RequiresRecreation) -> Color {
    match requires_recreation {
        RequiresRecreation::Never => Color::Green,
        RequiresRecreation::Conditionally => Color::Orange,
        RequiresRecreation::Always => Color::Red,
    }
}

/// Id of the synthetic "Template Modification" node of a resource.
pub fn template_node_id(resource_id: &str) -> String {
    format!("{}-Template", resource_id)
}

fn resource_label(resource: &ResourceChange) -> Label {
    let mut fields = vec![
        ("resource_type", resource.resource_type.clone()),
        ("action", resource.action.to_string()),
    ];
    if let Some(replacement) = resource.replacement {
        fields.push(("replacement", replacement.to_string()));
    }
    label_table(resource.logical_resource_id.as_str(), fields)
}

fn add_resource(builder: &mut GraphBuilder, resource: &ResourceChange) -> Result<(), CoreError> {
    let color = resource_color(resource)?;
    let label = resource_label(resource);

    if resource.action != Action::Modify {
        builder.add_node(Node {
            id: resource.logical_resource_id.clone(),
            label,
            shape: Shape::Record,
            color: Some(color),
        });
        return Ok(());
    }

    let mut members = Vec::new();
    for detail in &resource.details {
        let target_id = detail.target.node_id();
        if builder.add_node(target_node(detail)) {
            members.push(target_id.clone());
        }
        add_cause(builder, detail, &target_id);
    }

    builder.add_cluster(Cluster {
        id: resource.logical_resource_id.clone(),
        label,
        color,
        members,
    });
    Ok(())
}

fn target_node(detail: &ResourceChangeDetail) -> Node {
    let target = &detail.target;
    Node {
        id: target.node_id(),
        label: label_table(
            target.node_name(),
            [("requires_recreation", target.requires_recreation.to_string())],
        ),
        shape: Shape::Record,
        color: Some(recreation_color(target.requires_recreation)),
    }
}

fn add_cause(builder: &mut GraphBuilder, detail: &ResourceChangeDetail, target_id: &str) {
    match detail.cause() {
        Cause::Suppressed => {
            debug!(
                resource = %detail.resource_id,
                target = %target_id,
                source = ?detail.change_source,
                "cause not drawn"
            );
        }
        Cause::Template => {
            let template_id = template_node_id(&detail.resource_id);
            let added = builder.add_node(Node {
                id: template_id.clone(),
                label: label_table("Template Modification", Vec::<(&str, String)>::new()),
                shape: Shape::Box,
                color: None,
            });
            if added {
                debug!(resource = %detail.resource_id, "template modification node");
            }
            builder.add_edge(&template_id, target_id);
        }
        Cause::Entity(entity) => builder.add_edge(entity, target_id),
    }
}

fn parameter_node(parameter: &Parameter) -> Node {
    Node {
        id: parameter.node_id().to_string(),
        label: label_table(
            parameter.parameter_key.as_str(),
            [
                ("type", "Parameter".to_string()),
                ("value", parameter.display_value()),
            ],
        ),
        shape: Shape::Record,
        color: None,
    }
}
