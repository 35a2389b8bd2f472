//! Precedence diagramming for the U-Engine ecosystem.
//!
//! Computes early/late start and finish times, total float and the project
//! duration of an activity network using the Critical Path Method, with all
//! four precedence relationship kinds (FS, SS, FF, SF) and per-edge lead and
//! lag.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Activity`, `RelationshipType`,
//!   `ActivityRelationship`, `Activities`, `ActivityNode`
//! - **`validation`**: Input integrity checks (unknown endpoints,
//!   self-dependencies, cycles)
//! - **`diagram`**: The solver (`Diagram`) and `ScheduleSummary`
//! - **`plan`**: Name-based, serde-loadable `ProjectPlan`
//!
//! # Example
//!
//! ```
//! use u_precedence::plan::ProjectPlan;
//! use u_precedence::models::RelationshipType;
//!
//! let diagram = ProjectPlan::new()
//!     .with_activity("Pour", 3)
//!     .with_activity("Cure", 7)
//!     .with_activity("Frame", 5)
//!     .with_relationship("Pour", "Cure", RelationshipType::default())
//!     .with_relationship("Pour", "Frame", RelationshipType::default().with_lag(2))
//!     .solve()
//!     .unwrap();
//!
//! assert_eq!(diagram.project_duration(), 10);
//! assert_eq!(diagram.node_by_name("Frame").unwrap().total_float(), 0);
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Fondahl (1961), "A Non-Computer Approach to the Critical Path Method"
//! - PMI (2017), "PMBOK Guide", 6th ed., §6.5.2.2

mod graph;

pub mod diagram;
pub mod models;
pub mod plan;
pub mod validation;
