//! Keyed activity collection.

use serde::Serialize;
use std::collections::HashMap;

use super::{Activity, ActivityId, ModelError};

/// An insertion-ordered set of activities keyed by identifier.
///
/// Positions are stable: the activity at index `i` stays at `i` for the
/// lifetime of the collection, which is what the diagram arena relies on.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Activities {
    items: Vec<Activity>,
    #[serde(skip)]
    index: HashMap<ActivityId, usize>,
}

impl Activities {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting duplicate identifiers.
    pub fn from_activities(
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<Self, ModelError> {
        let mut collection = Self::new();
        collection.add_range(activities)?;
        Ok(collection)
    }

    /// Adds an activity.
    ///
    /// # Errors
    /// [`ModelError::DuplicateActivity`] if an activity with the same
    /// identifier is already present. The collection is left unchanged.
    pub fn add(&mut self, activity: Activity) -> Result<(), ModelError> {
        if self.index.contains_key(&activity.id()) {
            return Err(ModelError::DuplicateActivity {
                id: activity.id(),
                name: activity.name().to_string(),
            });
        }
        self.index.insert(activity.id(), self.items.len());
        self.items.push(activity);
        Ok(())
    }

    /// Adds every activity in order, stopping at the first duplicate.
    pub fn add_range(
        &mut self,
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<(), ModelError> {
        for activity in activities {
            self.add(activity)?;
        }
        Ok(())
    }

    /// Looks up an activity by identifier.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// First activity with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&Activity> {
        self.items.iter().find(|a| a.name() == name)
    }

    /// Insertion position of an activity.
    pub fn position(&self, id: ActivityId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Whether an activity with this identifier is present.
    pub fn contains(&self, id: ActivityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.items.iter()
    }

    /// Activities as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Activity] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Activity, Activity, Activity) {
        (
            Activity::new("A", 5).unwrap(),
            Activity::new("B", 6).unwrap(),
            Activity::new("C", 3).unwrap(),
        )
    }

    #[test]
    fn test_add_and_lookup() {
        let (a, b, c) = sample();
        let mut acts = Activities::new();
        acts.add(a.clone()).unwrap();
        acts.add_range([b.clone(), c.clone()]).unwrap();

        assert_eq!(acts.len(), 3);
        assert!(!acts.is_empty());
        assert_eq!(acts.get(b.id()), Some(&b));
        assert_eq!(acts.position(c.id()), Some(2));
        assert!(acts.contains(a.id()));
        assert_eq!(acts.find_by_name("C").map(Activity::id), Some(c.id()));
        assert!(acts.find_by_name("Z").is_none());
    }

    #[test]
    fn test_insertion_order() {
        let (a, b, c) = sample();
        let acts = Activities::from_activities([c.clone(), a.clone(), b.clone()]).unwrap();
        let names: Vec<&str> = acts.iter().map(Activity::name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let (a, b, _) = sample();
        let mut acts = Activities::from_activities([a.clone(), b]).unwrap();

        let err = acts.add(a.clone()).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateActivity {
                id: a.id(),
                name: "A".into()
            }
        );
        assert_eq!(acts.len(), 2);
    }

    #[test]
    fn test_duplicate_in_range() {
        let (a, b, _) = sample();
        let result = Activities::from_activities([a.clone(), b, a]);
        assert!(matches!(result, Err(ModelError::DuplicateActivity { .. })));
    }

    #[test]
    fn test_same_name_distinct_ids() {
        let first = Activity::new("Inspect", 1).unwrap();
        let second = Activity::new("Inspect", 1).unwrap();
        let acts = Activities::from_activities([first, second]).unwrap();
        assert_eq!(acts.len(), 2);
    }

    #[test]
    fn test_serialize_as_list() {
        let (a, b, _) = sample();
        let acts = Activities::from_activities([a, b]).unwrap();
        let json = serde_json::to_value(&acts).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["name"], "B");
    }
}
