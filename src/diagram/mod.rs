//! Precedence diagram solver (Critical Path Method).
//!
//! # Algorithm
//!
//! 1. Append zero-duration `Start` and `Finish` sentinels to the activity set.
//! 2. Wire `Start → a` (FS) for every activity `a` without a predecessor.
//! 3. Forward pass in topological order: each early start is the maximum of
//!    0 and the bound of every incoming relationship.
//! 4. Wire `a → Finish` (FS) for every activity without a successor, and for
//!    every activity finishing later than all of those.
//! 5. The project duration is Finish's early start; Finish's late finish
//!    equals it.
//! 6. Backward pass in reverse topological order: each late finish is the
//!    minimum bound of its outgoing relationships. Finish has none and takes
//!    the project duration; Start is also bounded by the earliest late start
//!    of any activity.
//!
//! Every bound is computed with checked arithmetic; a schedule that does not
//! fit in `i64` is rejected rather than wrapped.
//!
//! Both passes visit each node once after its neighbours on the relevant
//! side are final, so the result does not depend on input order.
//!
//! # Complexity
//! O(V + E) after validation.
//!
//! # Reference
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - PMI (2017), "PMBOK Guide", 6th ed., §6.5.2.2 (Critical Path Method)

mod pass;
mod summary;


pub use summary::ScheduleSummary;

use thiserror::Error;
use tracing::{debug, trace};

use crate::graph::PrecedenceGraph;
use crate::models::{
    Activities, Activity, ActivityId, ActivityNode, ActivityRelationship, ModelError,
    RelationshipType,
};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

use pass::{early_start_bound, late_finish_bound};

/// Name of the synthesized start sentinel.
pub const START: &str = "Start";

/// Name of the synthesized finish sentinel.
pub const FINISH: &str = "Finish";

/// Errors raised while constructing a [`Diagram`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// An activity or the activity collection was malformed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Input validation failed; every detected issue is listed.
    #[error("invalid diagram input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// Every activity has a predecessor. Unreachable after validation, which
    /// rejects the cycles this would require.
    #[error("no source activities: every activity has a predecessor")]
    NoSourceActivities,

    /// Every activity has a successor. Unreachable after validation.
    #[error("no sink activities: every activity has a successor")]
    NoSinkActivities,

    /// A start or finish time does not fit in `i64`.
    #[error("schedule arithmetic overflows at activity '{activity}'")]
    Overflow { activity: String },
}

impl DiagramError {
    /// Validation errors carried by [`DiagramError::Invalid`], empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A solved precedence diagram.
///
/// Construction runs both passes; a `Diagram` that exists is fully solved
/// and read-only.
///
/// # Example
///
/// ```
/// use u_precedence::diagram::Diagram;
/// use u_precedence::models::{Activity, ActivityRelationship, RelationshipType};
///
/// let a = Activity::new("A", 5).unwrap();
/// let b = Activity::new("B", 6).unwrap();
/// let c = Activity::new("C", 3).unwrap();
///
/// let rels = vec![
///     ActivityRelationship::new(&a, &b, RelationshipType::default()),
///     ActivityRelationship::new(&b, &c, RelationshipType::default()),
/// ];
/// let diagram = Diagram::new([a, b, c], rels).unwrap();
///
/// assert_eq!(diagram.project_duration(), 14);
/// let c = diagram.node_by_name("C").unwrap();
/// assert_eq!((c.early_start(), c.early_finish()), (11, 14));
/// assert_eq!(c.total_float(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    activities: Activities,
    relationships: Vec<ActivityRelationship>,
    supplied: usize,
    nodes: Vec<ActivityNode>,
    start: usize,
    finish: usize,
}

impl Diagram {
    /// Builds and solves a diagram.
    ///
    /// An empty relationship list is valid: every activity then runs from
    /// the project start in parallel.
    ///
    /// # Errors
    /// - [`DiagramError::Model`] for duplicate activities.
    /// - [`DiagramError::Invalid`] for an empty activity set, relationships
    ///   referencing unknown activities, self-dependencies, or cycles.
    /// - [`DiagramError::Overflow`] if durations, leads and lags add up past
    ///   the range of `i64`.
    pub fn new<A, R>(activities: A, relationships: R) -> Result<Self, DiagramError>
    where
        A: IntoIterator<Item = Activity>,
        R: IntoIterator<Item = ActivityRelationship>,
    {
        let mut activities = Activities::from_activities(activities)?;
        let relationships: Vec<ActivityRelationship> = relationships.into_iter().collect();
        validate_input(&activities, &relationships).map_err(DiagramError::Invalid)?;

        let start = activities.len();
        activities.add(Activity::milestone(START))?;
        let finish = activities.len();
        activities.add(Activity::milestone(FINISH))?;

        let mut graph = PrecedenceGraph::with_nodes(&activities);
        for rel in &relationships {
            let from = position(&activities, rel.from)?;
            let to = position(&activities, rel.to)?;
            graph.add_edge(from, to, rel.relationship_type);
        }

        let nodes = activities.iter().cloned().map(ActivityNode::new).collect();
        let mut diagram = Self {
            activities,
            supplied: relationships.len(),
            relationships,
            nodes,
            start,
            finish,
        };
        diagram.solve(graph)?;

        debug!(
            activities = diagram.start,
            relationships = diagram.relationships.len(),
            synthetic = diagram.relationships.len() - diagram.supplied,
            project_duration = diagram.project_duration(),
            "precedence diagram solved"
        );
        Ok(diagram)
    }

    fn solve(&mut self, mut graph: PrecedenceGraph) -> Result<(), DiagramError> {
        let sources: Vec<usize> = (0..self.start)
            .filter(|&i| !graph.has_predecessors(i))
            .collect();
        if sources.is_empty() {
            return Err(DiagramError::NoSourceActivities);
        }
        for &source in &sources {
            self.link(&mut graph, self.start, source);
        }
        debug!(count = sources.len(), "wired source activities to {START}");

        let mut order = graph
            .topological_order()
            .map_err(|node| self.cycle_error(node))?;

        for &node in &order {
            self.forward(&graph, node)?;
        }

        let sinks: Vec<usize> = (0..self.start)
            .filter(|&i| !graph.has_successors(i))
            .collect();
        let Some(nominal_finish) = sinks.iter().map(|&i| self.nodes[i].early_finish()).max()
        else {
            return Err(DiagramError::NoSinkActivities);
        };

        // Activities that finish after every nominal sink, e.g. through a
        // lead or an SS/FF successor that ends first.
        let overrunning: Vec<usize> = (0..self.start)
            .filter(|i| !sinks.contains(i) && self.nodes[*i].early_finish() > nominal_finish)
            .collect();

        for &node in sinks.iter().chain(&overrunning) {
            self.link(&mut graph, node, self.finish);
        }
        debug!(
            sinks = sinks.len(),
            overrunning = overrunning.len(),
            "wired sink activities to {FINISH}"
        );

        // Finish had no edges when the order was taken; it only has
        // incoming edges now, so it belongs last.
        order.retain(|&node| node != self.finish);
        order.push(self.finish);
        self.forward(&graph, self.finish)?;

        let project = self.nodes[self.finish].early_start();
        for &node in order.iter().rev() {
            self.backward(&graph, node, project)?;
        }

        Ok(())
    }

    fn forward(&mut self, graph: &PrecedenceGraph, node: usize) -> Result<(), DiagramError> {
        let duration = self.nodes[node].duration();
        let early_start = graph
            .predecessors(node)
            .try_fold(0, |acc: i64, (pred, rt)| {
                early_start_bound(rt, &self.nodes[pred], duration).map(|b| acc.max(b))
            })
            .filter(|es| es.checked_add(duration).is_some())
            .ok_or_else(|| self.overflow(node))?;

        trace!(activity = self.nodes[node].name(), early_start, "forward pass");
        self.nodes[node].set_early_start(early_start);
        Ok(())
    }

    fn backward(
        &mut self,
        graph: &PrecedenceGraph,
        node: usize,
        project: i64,
    ) -> Result<(), DiagramError> {
        let duration = self.nodes[node].duration();
        let bounds = graph
            .successors(node)
            .map(|(succ, rt)| late_finish_bound(rt, duration, &self.nodes[succ]))
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| self.overflow(node))?;
        let mut bound = bounds.into_iter().min();

        if node == self.start {
            // Start precedes every activity, not only the sources it is wired to.
            let earliest = self.nodes[..self.start]
                .iter()
                .map(ActivityNode::late_start)
                .min();
            bound = bound.into_iter().chain(earliest).min();
        }

        // Only Finish has no outgoing relationship.
        let late_finish = bound.unwrap_or(project);

        trace!(activity = self.nodes[node].name(), late_finish, "backward pass");
        self.nodes[node].set_late_finish(late_finish);
        Ok(())
    }

    fn link(&mut self, graph: &mut PrecedenceGraph, from: usize, to: usize) {
        let relationship_type = RelationshipType::default();
        graph.add_edge(from, to, relationship_type);
        self.relationships.push(ActivityRelationship::new(
            self.nodes[from].activity(),
            self.nodes[to].activity(),
            relationship_type,
        ));
    }

    /// Guard only: `validate_input` rejects cycles before the graph is solved.
    fn cycle_error(&self, node: usize) -> DiagramError {
        DiagramError::Invalid(vec![ValidationError::new(
            ValidationErrorKind::CyclicDependency,
            format!(
                "Circular dependency detected involving activity '{}'",
                self.nodes[node].name()
            ),
        )])
    }

    fn overflow(&self, node: usize) -> DiagramError {
        DiagramError::Overflow {
            activity: self.nodes[node].name().to_string(),
        }
    }

    /// All nodes: the caller's activities in insertion order, then Start,
    /// then Finish.
    pub fn nodes(&self) -> &[ActivityNode] {
        &self.nodes
    }

    /// Nodes of the caller's activities, without the sentinels.
    pub fn work_nodes(&self) -> &[ActivityNode] {
        &self.nodes[..self.start]
    }

    /// Node of an activity by identifier.
    pub fn node(&self, id: ActivityId) -> Option<&ActivityNode> {
        self.activities.position(id).map(|i| &self.nodes[i])
    }

    /// First node whose activity has the given name.
    pub fn node_by_name(&self, name: &str) -> Option<&ActivityNode> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    /// The Start sentinel.
    pub fn start(&self) -> &ActivityNode {
        &self.nodes[self.start]
    }

    /// The Finish sentinel.
    pub fn finish(&self) -> &ActivityNode {
        &self.nodes[self.finish]
    }

    /// Total project duration (Finish's early finish).
    pub fn project_duration(&self) -> i64 {
        self.finish().early_finish()
    }

    /// The augmented activity set, sentinels included.
    pub fn activities(&self) -> &Activities {
        &self.activities
    }

    /// Supplied relationships followed by every relationship the solver
    /// inserted.
    pub fn relationships(&self) -> &[ActivityRelationship] {
        &self.relationships
    }

    /// Relationships inserted by the solver (Start and Finish wiring).
    pub fn synthetic_relationships(&self) -> &[ActivityRelationship] {
        &self.relationships[self.supplied..]
    }

    /// Zero-float activities, ordered by early start then insertion order.
    pub fn critical_path(&self) -> Vec<&ActivityNode> {
        let mut critical: Vec<&ActivityNode> =
            self.work_nodes().iter().filter(|n| n.is_critical()).collect();
        critical.sort_by_key(|n| n.early_start());
        critical
    }

    /// Summary metrics of the solved schedule.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::calculate(self)
    }
}

fn position(activities: &Activities, id: ActivityId) -> Result<usize, DiagramError> {
    activities
        .position(id)
        .ok_or(DiagramError::Model(ModelError::UnknownActivity(id)))
}
