//! Change-set domain model and graph derivation for CloudFormation change sets.

pub mod causality;
pub mod derive;
pub mod error;
pub mod graph;
pub mod hash;
pub mod label;
pub mod object;
pub mod serialize;

pub use derive::derive;
pub use error::CoreError;
pub use graph::{AbstractGraph, RenderSink};
pub use object::ChangeSet;
