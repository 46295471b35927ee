//! Typed model of a CloudFormation `DescribeChangeSet` response.
//!
//! Entities are built once from the decoded JSON document, depth-first
//! (change set, change, resource change, detail, target), and never mutated.

pub mod change_set;
pub mod detail;
pub mod parameter;
pub(crate) mod raw;
pub mod resource_change;
pub mod rollback;
pub mod target;

pub use change_set::{Capability, ChangeSet, ExecutionStatus, Status};
pub use detail::{Cause, ChangeSource, Evaluation, ResourceChangeDetail};
pub use parameter::Parameter;
pub use resource_change::{Action, Change, ChangeType, Replacement, ResourceChange, Scope};
pub use rollback::{RollbackConfiguration, RollbackTrigger, Tag};
pub use target::{Attribute, RequiresRecreation, ResourceTargetDefinition};
