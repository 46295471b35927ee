//! Which template parameters actually drive a change.

use crate::error::CoreError;
use crate::object::{ChangeSet, ChangeSource, Parameter};
use std::collections::HashSet;

/// Parameters referenced as the cause of at least one detail.
///
/// The result keeps the change set's parameter declaration order; unreferenced
/// parameters are left out. A causing parameter that reuses its previous value
/// has no value to show and fails with [`CoreError::InvalidParameterState`].
pub fn causing_parameters(change_set: &ChangeSet) -> Result<Vec<&Parameter>, CoreError> {
    let keys: HashSet<&str> = change_set
        .changes
        .iter()
        .flat_map(|change| &change.resource_change.details)
        .filter(|detail| detail.change_source == ChangeSource::ParameterReference)
        .filter_map(|detail| detail.causing_entity.as_deref())
        .collect();

    change_set
        .parameters
        .iter()
        .filter(|p| keys.contains(p.parameter_key.as_str()))
        .map(|p| {
            if p.use_previous_value {
                Err(CoreError::InvalidParameterState(p.parameter_key.clone()))
            } else {
                Ok(p)
            }
        })
        .collect()
}
