pub mod graph;
pub mod params;
pub mod render;
pub mod show;

use anyhow::{Context, Result};
use cfn_graph_core::ChangeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a DescribeChangeSet response from disk.
pub fn load_change_set(path: &Path) -> Result<ChangeSet> {
    let data = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let change_set = ChangeSet::from_slice(&data)
        .with_context(|| format!("invalid change set in {}", path.display()))?;
    debug!(
        path = %path.display(),
        changes = change_set.changes.len(),
        parameters = change_set.parameters.len(),
        "loaded change set"
    );
    Ok(change_set)
}
