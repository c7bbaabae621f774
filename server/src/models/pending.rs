use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
}

/// Moderation record. Rejected events are deleted, so there is no rejected status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEvent {
    pub id: String,
    pub name: String,
    pub organizer: String,
    pub date: String,
    pub status: ReviewStatus,
}

impl PendingEvent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        organizer: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organizer: organizer.into(),
            date: date.into(),
            status: ReviewStatus::Pending,
        }
    }

    pub fn approved(self) -> Self {
        Self {
            status: ReviewStatus::Approved,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let event = PendingEvent::new("1", "Alegria 2025", "Pillai HOC", "2025-03-15");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["status"], "pending");

        let json = serde_json::to_value(event.approved()).unwrap();
        assert_eq!(json["status"], "approved");
    }
}
