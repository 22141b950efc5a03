use serde::Serialize;

/// One extracurricular activity as exposed by `GET /activities`.
///
/// `max_participants` is display metadata; the roster itself is unbounded.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }
}
