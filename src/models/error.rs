//! Errors raised while constructing model values.

use thiserror::Error;

use super::ActivityId;

/// A model value or collection could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Activity name is empty or whitespace.
    #[error("activity name must not be empty")]
    EmptyName,

    /// Activity duration is below zero.
    #[error("activity '{name}' has negative duration {duration}")]
    NegativeDuration { name: String, duration: i64 },

    /// An activity with the same identifier is already in the collection.
    #[error("duplicate activity '{name}' ({id})")]
    DuplicateActivity { id: ActivityId, name: String },

    /// A relationship endpoint is not in the collection.
    #[error("unknown activity {0}")]
    UnknownActivity(ActivityId),

    /// Relationship kind text did not match any known kind.
    #[error("unrecognized relationship kind '{0}'")]
    UnknownRelationshipKind(String),
}
