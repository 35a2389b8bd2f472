//! Precedence relationships between activities.
//!
//! A relationship is a directed edge `from → to` saying how the two
//! activities interlock. The logical kind names which end of the predecessor
//! (start or finish) constrains which end of the successor; lead and lag
//! shift that constraint.
//!
//! | Kind | Constraint |
//! |------|------------|
//! | FS | successor starts after predecessor finishes |
//! | SS | successor starts after predecessor starts |
//! | FF | successor finishes after predecessor finishes |
//! | SF | successor finishes after predecessor starts |
//!
//! The effective offset is `lag − lead`: lag delays the successor, lead pulls
//! it earlier.
//!
//! # Reference
//! PMI (2017), "PMBOK Guide", 6th ed., §6.3.2.1 (Precedence Diagramming Method)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Activities, Activity, ActivityId, ModelError};

/// Logical relationship between a predecessor and a successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RelationshipKind {
    /// Successor cannot start until the predecessor finishes.
    #[default]
    FinishToStart,
    /// Successor cannot finish until the predecessor finishes.
    FinishToFinish,
    /// Successor cannot start until the predecessor starts.
    StartToStart,
    /// Successor cannot finish until the predecessor starts.
    StartToFinish,
}

impl RelationshipKind {
    /// All kinds, in declaration order.
    pub const ALL: [RelationshipKind; 4] = [
        RelationshipKind::FinishToStart,
        RelationshipKind::FinishToFinish,
        RelationshipKind::StartToStart,
        RelationshipKind::StartToFinish,
    ];

    /// Two-letter abbreviation (`FS`, `FF`, `SS`, `SF`).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::FinishToFinish => "FF",
            Self::StartToStart => "SS",
            Self::StartToFinish => "SF",
        }
    }

    /// Full name (`FinishToStart`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FinishToStart",
            Self::FinishToFinish => "FinishToFinish",
            Self::StartToStart => "StartToStart",
            Self::StartToFinish => "StartToFinish",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the abbreviation or the full name, case-insensitively, with or
/// without `-`, `_` or space separators (`"FS"`, `"finish-to-start"`,
/// `"FinishToStart"`).
impl FromStr for RelationshipKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "fs" | "finishtostart" => Ok(Self::FinishToStart),
            "ff" | "finishtofinish" => Ok(Self::FinishToFinish),
            "ss" | "starttostart" => Ok(Self::StartToStart),
            "sf" | "starttofinish" => Ok(Self::StartToFinish),
            _ => Err(ModelError::UnknownRelationshipKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for RelationshipKind {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.name().to_string()
    }
}

/// How two activities interlock: a kind plus lead and lag.
///
/// # Example
///
/// ```
/// use u_precedence::models::{RelationshipKind, RelationshipType};
///
/// // Editing may start 15 days after writing starts.
/// let edit = RelationshipType::start_to_start().with_lag(15);
/// assert_eq!(edit.kind, RelationshipKind::StartToStart);
/// assert_eq!(edit.offset(), 15);
///
/// // Landscaping may begin 10 days before the punch list completes.
/// let landscape = RelationshipType::finish_to_start().with_lead(10);
/// assert_eq!(landscape.offset(), -10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipType {
    /// Logical relationship.
    #[serde(default)]
    pub kind: RelationshipKind,
    /// Time the successor may be pulled earlier.
    #[serde(default)]
    pub lead: u32,
    /// Time the successor is delayed.
    #[serde(default)]
    pub lag: u32,
}

impl RelationshipType {
    /// Creates a relationship of the given kind with no lead or lag.
    pub fn new(kind: RelationshipKind) -> Self {
        Self {
            kind,
            lead: 0,
            lag: 0,
        }
    }

    /// Finish-to-start, no lead or lag.
    pub fn finish_to_start() -> Self {
        Self::new(RelationshipKind::FinishToStart)
    }

    /// Finish-to-finish, no lead or lag.
    pub fn finish_to_finish() -> Self {
        Self::new(RelationshipKind::FinishToFinish)
    }

    /// Start-to-start, no lead or lag.
    pub fn start_to_start() -> Self {
        Self::new(RelationshipKind::StartToStart)
    }

    /// Start-to-finish, no lead or lag.
    pub fn start_to_finish() -> Self {
        Self::new(RelationshipKind::StartToFinish)
    }

    /// Sets the lead.
    pub fn with_lead(mut self, lead: u32) -> Self {
        self.lead = lead;
        self
    }

    /// Sets the lag.
    pub fn with_lag(mut self, lag: u32) -> Self {
        self.lag = lag;
        self
    }

    /// Effective offset applied by both passes: `lag − lead`.
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.lag) - i64::from(self.lead)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.abbreviation())?;
        match self.offset() {
            0 => Ok(()),
            d if d > 0 => write!(f, "+{d}"),
            d => write!(f, "{d}"),
        }
    }
}

/// A directed precedence edge between two activities.
///
/// The edge refers to its endpoints by identifier and does not own them.
/// Self-loops are representable here; the diagram rejects them as cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRelationship {
    /// Predecessor.
    pub from: ActivityId,
    /// Successor.
    pub to: ActivityId,
    /// Kind, lead and lag.
    pub relationship_type: RelationshipType,
}

impl ActivityRelationship {
    /// Creates an edge `from → to`.
    pub fn new(from: &Activity, to: &Activity, relationship_type: RelationshipType) -> Self {
        Self {
            from: from.id(),
            to: to.id(),
            relationship_type,
        }
    }

    /// Creates an edge between two activities looked up by identifier.
    ///
    /// # Errors
    /// [`ModelError::UnknownActivity`] if either endpoint is not in
    /// `activities`.
    pub fn between(
        activities: &Activities,
        from: ActivityId,
        to: ActivityId,
        relationship_type: RelationshipType,
    ) -> Result<Self, ModelError> {
        for id in [from, to] {
            if !activities.contains(id) {
                return Err(ModelError::UnknownActivity(id));
            }
        }
        Ok(Self {
            from,
            to,
            relationship_type,
        })
    }

    /// Shorthand for the relationship kind.
    pub fn kind(&self) -> RelationshipKind {
        self.relationship_type.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_finish_to_start() {
        let rt = RelationshipType::default();
        assert_eq!(rt.kind, RelationshipKind::FinishToStart);
        assert_eq!(rt.offset(), 0);
        assert_eq!(rt, RelationshipType::finish_to_start());
    }

    #[test]
    fn test_offset() {
        let rt = RelationshipType::finish_to_finish().with_lag(3).with_lead(5);
        assert_eq!(rt.offset(), -2);
        assert_eq!(rt.to_string(), "FF-2");
        assert_eq!(RelationshipType::start_to_start().with_lag(4).to_string(), "SS+4");
        assert_eq!(RelationshipType::start_to_finish().to_string(), "SF");
    }

    #[test]
    fn test_kind_parse() {
        let cases = [
            ("FS", RelationshipKind::FinishToStart),
            ("ff", RelationshipKind::FinishToFinish),
            ("start-to-start", RelationshipKind::StartToStart),
            ("StartToFinish", RelationshipKind::StartToFinish),
            ("start_to_finish", RelationshipKind::StartToFinish),
            ("Start to Finish", RelationshipKind::StartToFinish),
        ];
        for (text, kind) in cases {
            assert_eq!(text.parse::<RelationshipKind>(), Ok(kind), "{text}");
        }

        let err = "XX".parse::<RelationshipKind>().unwrap_err();
        assert_eq!(err, ModelError::UnknownRelationshipKind("XX".into()));
    }

    #[test]
    fn test_kind_display_roundtrips() {
        for kind in RelationshipKind::ALL {
            assert_eq!(kind.to_string().parse::<RelationshipKind>(), Ok(kind));
            assert_eq!(kind.abbreviation().parse::<RelationshipKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_deserialize() {
        let rt: RelationshipType = serde_json::from_str(r#"{"kind":"SS","lag":2}"#).unwrap();
        assert_eq!(rt, RelationshipType::start_to_start().with_lag(2));

        let rt: RelationshipType = serde_json::from_str("{}").unwrap();
        assert_eq!(rt, RelationshipType::default());

        let bad = serde_json::from_str::<RelationshipType>(r#"{"kind":"later"}"#);
        assert!(bad.unwrap_err().to_string().contains("later"));
    }

    #[test]
    fn test_relationship_new() {
        let a = Activity::new("A", 5).unwrap();
        let b = Activity::new("B", 6).unwrap();
        let rel = ActivityRelationship::new(&a, &b, RelationshipType::start_to_start());
        assert_eq!(rel.from, a.id());
        assert_eq!(rel.to, b.id());
        assert_eq!(rel.kind(), RelationshipKind::StartToStart);
        assert_eq!(
            rel,
            ActivityRelationship::new(&a, &b, RelationshipType::start_to_start())
        );
        assert_ne!(rel, ActivityRelationship::new(&b, &a, RelationshipType::start_to_start()));
    }

    #[test]
    fn test_relationship_between() {
        let a = Activity::new("A", 5).unwrap();
        let b = Activity::new("B", 6).unwrap();
        let stray = Activity::new("Stray", 1).unwrap();
        let activities = Activities::from_activities([a.clone(), b.clone()]).unwrap();

        let rel =
            ActivityRelationship::between(&activities, a.id(), b.id(), RelationshipType::default())
                .unwrap();
        assert_eq!(rel.to, b.id());

        let err = ActivityRelationship::between(
            &activities,
            a.id(),
            stray.id(),
            RelationshipType::default(),
        )
        .unwrap_err();
        assert_eq!(err, ModelError::UnknownActivity(stray.id()));
    }
}
