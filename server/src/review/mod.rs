//! Moderation queue: pending submissions and the public list they graduate to.

use serde::{Deserialize, Serialize};

use crate::models::pending::PendingEvent;

pub mod store;

pub use store::ReviewStore;

pub const DOCUMENT_VERSION: u32 = 1;

/// Fallback queue shown when nothing has been submitted yet.
pub fn sample_pending() -> Vec<PendingEvent> {
    vec![
        PendingEvent::new(
            "1",
            "Alegria 2025",
            "Pillai HOC College of Engineering",
            "2025-03-15",
        ),
        PendingEvent::new("2", "Algorithm 10.0", "Kalsekar Technical Campus", "2025-04-22"),
        PendingEvent::new("3", "Technovanza", "VJTI Mumbai", "2025-02-28"),
    ]
}

/// Both lists persisted together so a move between them is a single write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub version: u32,
    #[serde(default)]
    pub pending: Vec<PendingEvent>,
    #[serde(default)]
    pub public: Vec<PendingEvent>,
}

impl Default for ReviewDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            pending: Vec::new(),
            public: Vec::new(),
        }
    }
}

impl ReviewDocument {
    pub fn contains(&self, id: &str) -> bool {
        self.pending.iter().chain(self.public.iter()).any(|e| e.id == id)
    }

    /// Fill an empty pending list with the sample queue, skipping samples
    /// that were already approved. Returns how many were added.
    pub fn seed_if_empty(&mut self) -> usize {
        if !self.pending.is_empty() {
            return 0;
        }
        let public = &self.public;
        self.pending = sample_pending()
            .into_iter()
            .filter(|sample| !public.iter().any(|e| e.id == sample.id))
            .collect();
        self.pending.len()
    }

    fn take_pending(&mut self, id: &str) -> Option<PendingEvent> {
        let index = self.pending.iter().position(|e| e.id == id)?;
        Some(self.pending.remove(index))
    }

    /// Move a pending record to the public list with status approved.
    /// Unknown ids leave both lists untouched.
    pub fn approve(&mut self, id: &str) -> Option<PendingEvent> {
        let approved = self.take_pending(id)?.approved();
        self.public.push(approved.clone());
        Some(approved)
    }

    /// Drop a pending record. Nothing is kept once rejected.
    pub fn reject(&mut self, id: &str) -> Option<PendingEvent> {
        self.take_pending(id)
    }

    /// Queue a new submission. Returns false if the id is already in use.
    pub fn submit(&mut self, event: PendingEvent) -> bool {
        if self.contains(&event.id) {
            return false;
        }
        self.pending.push(event);
        true
    }
}
