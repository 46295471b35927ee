use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Graphviz rank direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RankDir {
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
        }
    }
}

/// Rendering options, typically loaded from a TOML file:
///
/// ```toml
/// rankdir = "TB"
/// strict = true
/// font_name = "Helvetica"
/// cluster_label_loc = "t"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DotOptions {
    pub rankdir: RankDir,
    /// Emit `strict digraph`, merging parallel edges.
    pub strict: bool,
    pub font_name: Option<String>,
    /// `labelloc` for cluster labels: `t` (top) or `b` (bottom).
    pub cluster_label_loc: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::LeftRight,
            strict: true,
            font_name: None,
            cluster_label_loc: "b".into(),
        }
    }
}

impl DotOptions {
    pub fn from_toml(content: &str) -> Result<Self, RenderError> {
        let options: DotOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<(), RenderError> {
        if !matches!(self.cluster_label_loc.as_str(), "t" | "b") {
            return Err(RenderError::InvalidOption {
                field: "cluster_label_loc",
                value: self.cluster_label_loc.clone(),
            });
        }
        Ok(())
    }
}
