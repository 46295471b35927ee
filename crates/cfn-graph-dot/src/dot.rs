use crate::error::RenderError;
use crate::options::DotOptions;
use cfn_graph_core::graph::{AbstractGraph, Cluster, Node, RenderSink};
use cfn_graph_core::label::Label;
use std::collections::HashMap;
use std::fmt::Write;

/// Renders an [`AbstractGraph`] as Graphviz DOT source.
///
/// Clusters come first (as `subgraph "cluster_<id>"` blocks holding their
/// member nodes), then nodes outside any cluster, then edges, each in the
/// order the graph lists them.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    options: DotOptions,
}

impl DotRenderer {
    pub fn new(options: DotOptions) -> Self {
        Self { options }
    }

    fn write_graph(&self, out: &mut String, graph: &AbstractGraph) -> std::fmt::Result {
        let nodes: HashMap<&str, &Node> = graph.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        let strict = if self.options.strict { "strict " } else { "" };
        writeln!(out, "{}digraph {} {{", strict, quote(&graph.name))?;
        writeln!(out, "  rankdir={};", self.options.rankdir.as_str())?;
        if let Some(font) = &self.options.font_name {
            writeln!(out, "  graph [fontname={}];", quote(font))?;
            writeln!(out, "  node [fontname={}];", quote(font))?;
        }

        for cluster in &graph.clusters {
            self.write_cluster(out, cluster, &nodes)?;
        }
        for node in graph.top_level_nodes() {
            write_node(out, "  ", node)?;
        }
        for edge in &graph.edges {
            writeln!(out, "  {} -> {};", quote(&edge.source), quote(&edge.target))?;
        }
        writeln!(out, "}}")
    }

    fn write_cluster(
        &self,
        out: &mut String,
        cluster: &Cluster,
        nodes: &HashMap<&str, &Node>,
    ) -> std::fmt::Result {
        // Graphviz only draws subgraphs whose name starts with "cluster".
        writeln!(out, "  subgraph {} {{", quote(&format!("cluster_{}", cluster.id)))?;
        writeln!(out, "    label={};", html_label(&cluster.label))?;
        writeln!(out, "    labelloc={};", self.options.cluster_label_loc)?;
        writeln!(out, "    color={};", cluster.color.as_str())?;
        for member in &cluster.members {
            if let Some(node) = nodes.get(member.as_str()) {
                write_node(out, "    ", node)?;
            }
        }
        writeln!(out, "  }}")
    }
}

impl RenderSink for DotRenderer {
    type Output = String;
    type Error = RenderError;

    fn render(&self, graph: &AbstractGraph) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_graph(&mut out, graph)?;
        Ok(out)
    }
}

fn write_node(out: &mut String, indent: &str, node: &Node) -> std::fmt::Result {
    write!(
        out,
        "{}{} [label={}, shape={}",
        indent,
        quote(&node.id),
        html_label(&node.label),
        node.shape.as_str()
    )?;
    if let Some(color) = node.color {
        write!(out, ", color={}", color.as_str())?;
    }
    writeln!(out, "];")
}

/// Quoted DOT identifier.
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// HTML-like table label: bold title row, then one `Field: value` row each.
fn html_label(label: &Label) -> String {
    if label.rows.is_empty() {
        return format!("<<b>{}</b>>", escape_html(&label.title));
    }
    let mut html = String::from("<<table border='0' cellborder='0'>");
    html.push_str(&format!(
        "<tr><td colspan='2'><b>{}</b></td></tr>",
        escape_html(&label.title)
    ));
    for row in &label.rows {
        html.push_str(&format!(
            "<tr><td>{}:</td><td>{}</td></tr>",
            escape_html(&row.name),
            escape_html(&row.value)
        ));
    }
    html.push_str("</table>>");
    html
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
