use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] cfn_graph_core::error::CoreError),

    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("invalid render config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {value}")]
    InvalidOption { field: &'static str, value: String },
}
