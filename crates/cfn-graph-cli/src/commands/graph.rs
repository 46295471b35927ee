use anyhow::Result;
use cfn_graph_core::derive;
use std::path::PathBuf;

pub fn run(payload: PathBuf) -> Result<()> {
    let change_set = super::load_change_set(&payload)?;
    let graph = derive(&change_set)?;
    let output = serde_json::json!({
        "fingerprint": graph.fingerprint()?.hex(),
        "graph": graph,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
