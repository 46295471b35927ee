//! Graphviz DOT rendering for derived change-set graphs.

pub mod dot;
pub mod error;
pub mod options;
pub mod output;

pub use dot::DotRenderer;
pub use error::RenderError;
pub use options::DotOptions;
pub use output::write_dot;
