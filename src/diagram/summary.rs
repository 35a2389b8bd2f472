//! Schedule summary metrics.
//!
//! Condenses a solved diagram into the figures a project report leads with.
//! Only the caller's activities are counted; the sentinels are excluded.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Project duration | Finish's early finish |
//! | Critical count | Activities with zero total float |
//! | Total float | Sum of total float (saturating) |
//! | Max float | Largest total float of any activity |
//! | Avg float | Mean total float |

use serde::Serialize;

use super::Diagram;

/// Summary of a solved schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    /// Total project duration.
    pub project_duration: i64,
    /// Number of activities (sentinels excluded).
    pub activity_count: usize,
    /// Number of zero-float activities.
    pub critical_count: usize,
    /// Sum of total float across activities.
    pub total_float: i64,
    /// Largest total float of any activity.
    pub max_float: i64,
    /// Mean total float.
    pub avg_float: f64,
}

impl ScheduleSummary {
    /// Computes the summary of a solved diagram.
    pub fn calculate(diagram: &Diagram) -> Self {
        let nodes = diagram.work_nodes();
        let mut critical_count = 0;
        let mut total_float: i64 = 0;
        let mut max_float: i64 = 0;

        for node in nodes {
            let float = node.total_float();
            if float == 0 {
                critical_count += 1;
            }
            total_float = total_float.saturating_add(float);
            max_float = max_float.max(float);
        }

        let avg_float = if nodes.is_empty() {
            0.0
        } else {
            total_float as f64 / nodes.len() as f64
        };

        Self {
            project_duration: diagram.project_duration(),
            activity_count: nodes.len(),
            critical_count,
            total_float,
            max_float,
            avg_float,
        }
    }

    /// Fraction of activities on the critical path (0.0..1.0).
    pub fn critical_ratio(&self) -> f64 {
        if self.activity_count == 0 {
            0.0
        } else {
            self.critical_count as f64 / self.activity_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityRelationship, RelationshipType};

    fn diamond() -> Diagram {
        let a = Activity::new("A", 5).unwrap();
        let b = Activity::new("B", 6).unwrap();
        let c = Activity::new("C", 3).unwrap();
        let d = Activity::new("D", 7).unwrap();
        let fs = RelationshipType::default();
        let rels = vec![
            ActivityRelationship::new(&a, &b, fs),
            ActivityRelationship::new(&a, &c, fs),
            ActivityRelationship::new(&b, &d, fs),
            ActivityRelationship::new(&c, &d, fs),
        ];
        Diagram::new([a, b, c, d], rels).unwrap()
    }

    #[test]
    fn test_summary_diamond() {
        let summary = ScheduleSummary::calculate(&diamond());
        assert_eq!(summary.project_duration, 18);
        assert_eq!(summary.activity_count, 4);
        assert_eq!(summary.critical_count, 3);
        assert_eq!(summary.total_float, 3);
        assert_eq!(summary.max_float, 3);
        assert!((summary.avg_float - 0.75).abs() < 1e-10);
        assert!((summary.critical_ratio() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_summary_independent_activities() {
        let acts = [
            Activity::new("A", 2).unwrap(),
            Activity::new("B", 8).unwrap(),
        ];
        let summary = Diagram::new(acts, Vec::<ActivityRelationship>::new())
            .unwrap()
            .summary();
        assert_eq!(summary.project_duration, 8);
        assert_eq!(summary.critical_count, 1);
        assert_eq!(summary.max_float, 6);
    }

    #[test]
    fn test_summary_total_float_saturates() {
        let acts = [
            Activity::new("Long", i64::MAX - 1).unwrap(),
            Activity::new("Gate 1", 0).unwrap(),
            Activity::new("Gate 2", 0).unwrap(),
        ];
        let summary = Diagram::new(acts, Vec::<ActivityRelationship>::new())
            .unwrap()
            .summary();
        assert_eq!(summary.max_float, i64::MAX - 1);
        assert_eq!(summary.total_float, i64::MAX);
    }

    #[test]
    fn test_summary_serialize() {
        let json = serde_json::to_value(diamond().summary()).unwrap();
        assert_eq!(json["project_duration"], 18);
        assert_eq!(json["critical_count"], 3);
    }
}
