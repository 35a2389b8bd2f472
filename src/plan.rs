//! Declarative project plans.
//!
//! A [`ProjectPlan`] describes a project the way it is usually written down:
//! activities by name, relationships between names. It is serde-friendly,
//! so a plan can be loaded from any format and then resolved into the
//! identifier-keyed model the solver works on.
//!
//! ```json
//! {
//!   "activities": [
//!     { "name": "Design", "duration": 5 },
//!     { "name": "Build", "duration": 10 }
//!   ],
//!   "relationships": [
//!     { "from": "Design", "to": "Build", "kind": "SS", "lag": 2 }
//!   ]
//! }
//! ```
//!
//! `kind` defaults to finish-to-start, `lead` and `lag` to 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::diagram::{Diagram, DiagramError};
use crate::models::{
    Activities, Activity, ActivityId, ActivityRelationship, ModelError, RelationshipKind,
    RelationshipType,
};

/// Errors raised while resolving or solving a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Two activities in the plan share a name.
    #[error("duplicate activity name '{0}' in plan")]
    DuplicateName(String),

    /// A relationship names an activity the plan does not define.
    #[error("relationship references unknown activity '{0}'")]
    UnknownActivity(String),

    /// An activity could not be constructed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The resolved diagram was rejected by the solver.
    #[error(transparent)]
    Diagram(#[from] DiagramError),
}

/// An activity entry of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedActivity {
    /// Unique name within the plan.
    pub name: String,
    /// Duration in time units.
    pub duration: i64,
}

/// A relationship entry of a plan, endpoints referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRelationship {
    /// Predecessor name.
    pub from: String,
    /// Successor name.
    pub to: String,
    #[serde(default)]
    pub kind: RelationshipKind,
    #[serde(default)]
    pub lead: u32,
    #[serde(default)]
    pub lag: u32,
}

impl PlannedRelationship {
    /// The relationship type this entry describes.
    pub fn relationship_type(&self) -> RelationshipType {
        RelationshipType::new(self.kind)
            .with_lead(self.lead)
            .with_lag(self.lag)
    }
}

/// A named, serializable project definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    #[serde(default)]
    pub activities: Vec<PlannedActivity>,
    #[serde(default)]
    pub relationships: Vec<PlannedRelationship>,
}

impl ProjectPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an activity.
    pub fn with_activity(mut self, name: impl Into<String>, duration: i64) -> Self {
        self.activities.push(PlannedActivity {
            name: name.into(),
            duration,
        });
        self
    }

    /// Adds a relationship between two named activities.
    pub fn with_relationship(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        self.relationships.push(PlannedRelationship {
            from: from.into(),
            to: to.into(),
            kind: relationship_type.kind,
            lead: relationship_type.lead,
            lag: relationship_type.lag,
        });
        self
    }

    /// Resolves names into identifier-keyed activities and relationships.
    ///
    /// Each activity receives a fresh identifier, so resolving the same plan
    /// twice yields distinct (but equally shaped) models.
    ///
    /// # Errors
    /// - [`PlanError::Model`] for an empty name or a negative duration.
    /// - [`PlanError::DuplicateName`] if two activities share a name.
    /// - [`PlanError::UnknownActivity`] if a relationship names an activity
    ///   the plan does not define.
    pub fn resolve(&self) -> Result<(Activities, Vec<ActivityRelationship>), PlanError> {
        let mut activities = Activities::new();
        let mut ids: HashMap<&str, ActivityId> = HashMap::new();

        for planned in &self.activities {
            let activity = Activity::new(planned.name.as_str(), planned.duration)?;
            if ids.insert(planned.name.as_str(), activity.id()).is_some() {
                return Err(PlanError::DuplicateName(planned.name.clone()));
            }
            activities.add(activity)?;
        }

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| PlanError::UnknownActivity(name.to_string()))
        };

        let relationships = self
            .relationships
            .iter()
            .map(|planned| {
                Ok(ActivityRelationship {
                    from: lookup(&planned.from)?,
                    to: lookup(&planned.to)?,
                    relationship_type: planned.relationship_type(),
                })
            })
            .collect::<Result<Vec<_>, PlanError>>()?;

        debug!(
            activities = activities.len(),
            relationships = relationships.len(),
            "project plan resolved"
        );
        Ok((activities, relationships))
    }

    /// Resolves and solves the plan.
    pub fn solve(&self) -> Result<Diagram, PlanError> {
        let (activities, relationships) = self.resolve()?;
        Ok(Diagram::new(activities, relationships)?)
    }
}
