use indexmap::IndexMap;

use crate::models::Activity;
use crate::store::{RosterError, RosterStore};

pub fn list_activities(store: &RosterStore) -> IndexMap<String, Activity> {
    store.snapshot()
}

/// Adds `email` to the activity's roster and returns the confirmation line
/// shown to the student. The exact wording is part of the API contract.
pub fn signup(store: &RosterStore, activity: &str, email: &str) -> Result<String, RosterError> {
    store.signup(activity, email)?;
    Ok(format!("Signed up {} for {}", email, activity))
}

pub fn unregister(store: &RosterStore, activity: &str, email: &str) -> Result<String, RosterError> {
    store.unregister(activity, email)?;
    Ok(format!("Unregistered {} from {}", email, activity))
}
