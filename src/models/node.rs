//! Computed schedule state for one activity.
//!
//! # Time Fields
//!
//! Only two values are stored; the rest are derived:
//!
//! | Field | Definition |
//! |-------|-----------|
//! | ES | stored, set by the forward pass |
//! | EF | `ES + duration` |
//! | LF | stored, set by the backward pass |
//! | LS | `LF − duration` |
//! | TF | `LS − ES` |
//!
//! The solver rejects any schedule whose derived fields would not fit in
//! `i64`, so the getters never overflow.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Activity, ActivityId};

/// Early/late start and finish of an [`Activity`] within one diagram.
///
/// Nodes are created and filled in by [`Diagram`](crate::diagram::Diagram);
/// callers only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityNode {
    activity: Activity,
    early_start: i64,
    late_finish: i64,
}

impl ActivityNode {
    pub(crate) fn new(activity: Activity) -> Self {
        Self {
            activity,
            early_start: 0,
            late_finish: 0,
        }
    }

    pub(crate) fn set_early_start(&mut self, early_start: i64) {
        self.early_start = early_start;
    }

    pub(crate) fn set_late_finish(&mut self, late_finish: i64) {
        self.late_finish = late_finish;
    }

    /// The underlying activity.
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Shorthand for `activity().id()`.
    pub fn id(&self) -> ActivityId {
        self.activity.id()
    }

    /// Shorthand for `activity().name()`.
    pub fn name(&self) -> &str {
        self.activity.name()
    }

    /// Shorthand for `activity().duration()`.
    pub fn duration(&self) -> i64 {
        self.activity.duration()
    }

    /// Early start (ES).
    pub fn early_start(&self) -> i64 {
        self.early_start
    }

    /// Early finish (EF).
    #[inline]
    pub fn early_finish(&self) -> i64 {
        self.early_start + self.duration()
    }

    /// Late start (LS).
    #[inline]
    pub fn late_start(&self) -> i64 {
        self.late_finish - self.duration()
    }

    /// Late finish (LF).
    pub fn late_finish(&self) -> i64 {
        self.late_finish
    }

    /// Total float: how long the activity can slip without moving the
    /// project finish.
    #[inline]
    pub fn total_float(&self) -> i64 {
        self.late_start() - self.early_start
    }

    /// Whether the activity has zero total float.
    pub fn is_critical(&self) -> bool {
        self.total_float() == 0
    }
}

impl Serialize for ActivityNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActivityNode", 7)?;
        state.serialize_field("activity", &self.activity)?;
        state.serialize_field("early_start", &self.early_start())?;
        state.serialize_field("early_finish", &self.early_finish())?;
        state.serialize_field("late_start", &self.late_start())?;
        state.serialize_field("late_finish", &self.late_finish())?;
        state.serialize_field("total_float", &self.total_float())?;
        state.serialize_field("critical", &self.is_critical())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let mut node = ActivityNode::new(Activity::new("C", 3).unwrap());
        node.set_early_start(5);
        node.set_late_finish(11);

        assert_eq!(node.early_start(), 5);
        assert_eq!(node.early_finish(), 8);
        assert_eq!(node.late_start(), 8);
        assert_eq!(node.late_finish(), 11);
        assert_eq!(node.total_float(), 3);
        assert!(!node.is_critical());
    }

    #[test]
    fn test_new_node_is_zeroed() {
        let node = ActivityNode::new(Activity::new("A", 0).unwrap());
        assert_eq!(node.early_start(), 0);
        assert_eq!(node.late_finish(), 0);
        assert!(node.is_critical());
    }

    #[test]
    fn test_serialize_includes_derived() {
        let mut node = ActivityNode::new(Activity::new("B", 6).unwrap());
        node.set_early_start(5);
        node.set_late_finish(11);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["activity"]["name"], "B");
        assert_eq!(json["early_finish"], 11);
        assert_eq!(json["late_start"], 5);
        assert_eq!(json["total_float"], 0);
        assert_eq!(json["critical"], true);
    }
}
