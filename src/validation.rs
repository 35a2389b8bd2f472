//! Input validation for precedence diagrams.
//!
//! Checks structural integrity of an activity set and its relationships
//! before solving. Detects:
//! - An empty activity set
//! - Relationships referencing activities outside the set
//! - Self-dependencies
//! - Circular precedence dependencies (DAG validation)
//!
//! Duplicate identifiers never reach this stage: [`Activities`] rejects them
//! on insertion.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use thiserror::Error;

use crate::graph::PrecedenceGraph;
use crate::models::{Activities, ActivityId, ActivityRelationship};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No activities were supplied.
    EmptyActivitySet,
    /// A relationship references an activity that is not in the set.
    UnknownActivity,
    /// A relationship connects an activity to itself.
    SelfDependency,
    /// Precedence graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a precedence diagram.
///
/// Checks:
/// 1. At least one activity
/// 2. Every relationship endpoint is in `activities`
/// 3. No relationship connects an activity to itself
/// 4. No circular dependencies among the remaining relationships
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    activities: &Activities,
    relationships: &[ActivityRelationship],
) -> ValidationResult {
    let mut errors = Vec::new();

    if activities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyActivitySet,
            "Diagram requires at least one activity",
        ));
    }

    let mut graph = PrecedenceGraph::with_nodes(activities);

    for rel in relationships {
        let from = activities.position(rel.from);
        let to = activities.position(rel.to);

        for (end, id, pos) in [("predecessor", rel.from, from), ("successor", rel.to, to)] {
            if pos.is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownActivity,
                    format!(
                        "{} relationship references unknown {end} {id}",
                        rel.relationship_type
                    ),
                ));
            }
        }

        let (Some(from), Some(to)) = (from, to) else {
            continue;
        };

        if from == to {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfDependency,
                format!(
                    "Activity '{}' cannot depend on itself",
                    display_name(activities, rel.from)
                ),
            ));
            continue;
        }

        graph.add_edge(from, to, rel.relationship_type);
    }

    if let Err(node) = graph.topological_order() {
        let name = activities
            .as_slice()
            .get(node)
            .map(|a| a.name().to_string())
            .unwrap_or_default();
        errors.push(ValidationError::new(
            ValidationErrorKind::CyclicDependency,
            format!("Circular dependency detected involving activity '{name}'"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn display_name(activities: &Activities, id: ActivityId) -> String {
    activities
        .get(id)
        .map(|a| a.name().to_string())
        .unwrap_or_else(|| id.to_string())
}
