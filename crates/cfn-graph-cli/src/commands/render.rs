use anyhow::{Context, Result};
use cfn_graph_core::{derive, RenderSink};
use cfn_graph_dot::{write_dot, DotOptions, DotRenderer};
use std::env;
use std::path::PathBuf;
use tracing::debug;

const CONFIG_ENV: &str = "CFN_GRAPH_CONFIG";

pub fn run(payload: PathBuf, output: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let options = match config.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from)) {
        Some(path) => DotOptions::load(&path)
            .with_context(|| format!("cannot load render config {}", path.display()))?,
        None => DotOptions::default(),
    };

    let change_set = super::load_change_set(&payload)?;
    let graph = derive(&change_set)?;
    debug!(fingerprint = %graph.fingerprint()?, "rendering graph");
    let dot = DotRenderer::new(options).render(&graph)?;

    match output {
        Some(path) => {
            write_dot(&path, &dot)?;
            println!(
                "Wrote {} ({} nodes, {} edges)",
                path.display(),
                graph.nodes.len(),
                graph.edges.len()
            );
        }
        None => print!("{}", dot),
    }
    Ok(())
}
