use indexmap::IndexMap;
use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// In-memory roster state, owned explicitly so tests can spin up isolated
/// instances instead of sharing process-wide globals.
///
/// The activity set is fixed at construction; signup/unregister only ever
/// mutate the participant lists. Both mutations do their membership check and
/// the write under the same write lock, so concurrent requests for the same
/// activity cannot lose updates.
pub struct RosterStore {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl RosterStore {
    pub fn new(catalog: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// The school's standard activity catalog, pre-enrolled students included.
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Full copy of the current mapping, in catalog order.
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        self.activities.read().clone()
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write();
        let entry = activities
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)?;
        if entry.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }
        entry.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write();
        let entry = activities
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)?;
        let Some(idx) = entry.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotSignedUp);
        };
        entry.participants.remove(idx);
        Ok(())
    }
}

fn default_catalog() -> IndexMap<String, Activity> {
    IndexMap::from([
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_adds_participant_once() {
        let store = RosterStore::with_default_catalog();
        assert_eq!(store.signup("Chess Club", "newkid@mergington.edu"), Ok(()));
        assert_eq!(
            store.signup("Chess Club", "newkid@mergington.edu"),
            Err(RosterError::AlreadySignedUp)
        );

        let snapshot = store.snapshot();
        let roster = &snapshot["Chess Club"].participants;
        assert_eq!(
            roster.iter().filter(|p| *p == "newkid@mergington.edu").count(),
            1
        );
    }

    #[test]
    fn signup_unknown_activity_fails() {
        let store = RosterStore::with_default_catalog();
        assert_eq!(
            store.signup("Knitting Circle", "a@b.c"),
            Err(RosterError::ActivityNotFound)
        );
    }

    #[test]
    fn unregister_removes_only_enrolled() {
        let store = RosterStore::with_default_catalog();
        assert_eq!(
            store.unregister("Chess Club", "michael@mergington.edu"),
            Ok(())
        );
        assert_eq!(
            store.unregister("Chess Club", "michael@mergington.edu"),
            Err(RosterError::NotSignedUp)
        );
        assert!(!store.snapshot()["Chess Club"]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn unregister_unknown_activity_fails() {
        let store = RosterStore::with_default_catalog();
        assert_eq!(
            store.unregister("Knitting Circle", "a@b.c"),
            Err(RosterError::ActivityNotFound)
        );
    }

    #[test]
    fn catalog_order_is_stable() {
        let store = RosterStore::with_default_catalog();
        let snapshot = store.snapshot();
        let names: Vec<&str> = snapshot.keys().map(|s| s.as_str()).collect();
        assert_eq!(names.first().copied(), Some("Chess Club"));
        assert!(names.contains(&"Art Club"));
    }
}
