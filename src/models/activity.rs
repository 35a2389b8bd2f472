//! Activity model.
//!
//! An activity is the smallest schedulable unit of work in a precedence
//! diagram: a named task with a fixed, non-negative duration. Activities are
//! immutable values; the computed schedule lives in
//! [`ActivityNode`](super::ActivityNode), never on the activity itself.
//!
//! # Identity
//!
//! Every activity receives a freshly generated [`ActivityId`] at
//! construction. Two activities with the same name and duration are still
//! distinct activities.
//!
//! # Reference
//! PMI (2017), "PMBOK Guide", 6th ed., §6.3 (Sequence Activities)

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ModelError;

/// Opaque unique identifier of an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A project activity with a fixed duration.
///
/// Durations are unit-less integers; the caller decides whether one unit is
/// a day, an hour, or a sprint.
///
/// # Example
///
/// ```
/// use u_precedence::models::Activity;
///
/// let pour = Activity::new("Pour foundation", 5).unwrap();
/// assert_eq!(pour.name(), "Pour foundation");
/// assert_eq!(pour.duration(), 5);
///
/// assert!(Activity::new("  ", 5).is_err());
/// assert!(Activity::new("Cure", -1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Activity {
    id: ActivityId,
    name: String,
    duration: i64,
}

impl Activity {
    /// Creates a new activity with a generated identifier.
    ///
    /// # Errors
    /// - [`ModelError::EmptyName`] if `name` is empty or whitespace.
    /// - [`ModelError::NegativeDuration`] if `duration < 0`.
    pub fn new(name: impl Into<String>, duration: i64) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if duration < 0 {
            return Err(ModelError::NegativeDuration { name, duration });
        }
        Ok(Self {
            id: ActivityId::generate(),
            name,
            duration,
        })
    }

    /// Zero-duration milestone used for the Start and Finish sentinels.
    pub(crate) fn milestone(name: &str) -> Self {
        Self {
            id: ActivityId::generate(),
            name: name.to_string(),
            duration: 0,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> ActivityId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time units required to complete the activity.
    pub fn duration(&self) -> i64 {
        self.duration
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
