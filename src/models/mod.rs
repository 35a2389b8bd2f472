//! Precedence diagram domain models.
//!
//! Value types describing a project network and the per-activity schedule
//! state computed from it.
//!
//! | Type | Role |
//! |------|------|
//! | `Activity` | Unit of work (name + duration) |
//! | `RelationshipType` | FS/SS/FF/SF kind with lead and lag |
//! | `ActivityRelationship` | Directed edge between two activities |
//! | `Activities` | Duplicate-free, insertion-ordered activity set |
//! | `ActivityNode` | Computed ES/EF/LS/LF/float for one activity |

mod activities;
mod activity;
mod error;
mod node;
mod relationship;

pub use activities::Activities;
pub use activity::{Activity, ActivityId};
pub use error::ModelError;
pub use node::ActivityNode;
pub use relationship::{ActivityRelationship, RelationshipKind, RelationshipType};
