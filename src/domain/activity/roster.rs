//! The roster: every activity the school offers, keyed by exact name.

use indexmap::IndexMap;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::Activity;

/// Ordered mapping from activity name to [`Activity`].
///
/// Iteration follows insertion order, so listings come back in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    activities: IndexMap<String, Activity>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from activities. Later activities with a name already
    /// present are dropped.
    pub fn from_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut roster = Self::new();
        for activity in activities {
            roster.insert(activity);
        }
        roster
    }

    /// Add an activity. Returns `false` and leaves the roster untouched if
    /// the name is taken.
    pub fn insert(&mut self, activity: Activity) -> bool {
        if self.activities.contains_key(activity.name()) {
            return false;
        }
        self.activities.insert(activity.name().to_string(), activity);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Apply `change` to the named activity and return it as stored.
    ///
    /// The change runs against a copy that is committed only on success, so a
    /// rejected change leaves the roster as it was.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if no activity has this name
    /// - whatever `change` returns
    pub fn modify<F>(&mut self, name: &str, change: F) -> Result<Activity, DomainError>
    where
        F: FnOnce(&mut Activity) -> Result<(), DomainError>,
    {
        let stored = self.activities.get_mut(name).ok_or_else(|| {
            DomainError::new(ErrorCode::ActivityNotFound, "Activity not found")
                .with_detail("activity", name)
        })?;

        let mut updated = stored.clone();
        change(&mut updated)?;
        *stored = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::from_activities([
            Activity::new("Drama Club", "desc", "Mondays", 25),
            Activity::new("Art Workshop", "desc", "Fridays", 20),
        ])
    }

    #[test]
    fn keeps_insertion_order() {
        let roster = sample();
        let names: Vec<_> = roster.names().collect();
        assert_eq!(names, ["Drama Club", "Art Workshop"]);
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut roster = sample();
        let inserted = roster.insert(Activity::new("Drama Club", "other", "Never", 1));
        assert!(!inserted);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("Drama Club").unwrap().max_participants(), 25);
    }

    #[test]
    fn lookup_is_exact() {
        let roster = sample();
        assert!(roster.get("Drama Club").is_some());
        assert!(roster.get("drama club").is_none());
        assert!(roster.get("Drama Club ").is_none());
    }

    #[test]
    fn modify_commits_successful_change() {
        let mut roster = sample();
        let updated = roster
            .modify("Drama Club", |activity| {
                activity.sign_up("kim@mergington.edu").map_err(DomainError::from)
            })
            .unwrap();

        assert_eq!(updated.participants(), ["kim@mergington.edu"]);
        assert_eq!(roster.get("Drama Club"), Some(&updated));
    }

    #[test]
    fn modify_discards_rejected_change() {
        let mut roster = sample();
        let err = roster
            .modify("Drama Club", |activity| {
                activity.sign_up("kim@mergington.edu").map_err(DomainError::from)?;
                activity.unregister("ghost@mergington.edu").map_err(DomainError::from)
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotRegistered);
        assert!(roster.get("Drama Club").unwrap().participants().is_empty());
    }

    #[test]
    fn modify_unknown_activity_is_not_found() {
        let mut roster = sample();
        let before = roster.clone();
        let err = roster.modify("Fake Club", |_| Ok(())).unwrap_err();

        assert_eq!(err.code, ErrorCode::ActivityNotFound);
        assert_eq!(err.detail("activity"), Some("Fake Club"));
        assert_eq!(roster, before);
    }
}
