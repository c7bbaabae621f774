use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::{ReviewDocument, DOCUMENT_VERSION};
use crate::models::pending::PendingEvent;
use crate::utils::error::{AppError, AppResult};

/// Review queue backed by a single JSON document.
///
/// Every mutation runs on a copy of the document, is written to disk, and
/// only then replaces the in-memory state, all under one lock. A failed write
/// leaves the queue exactly as it was.
pub struct ReviewStore {
    path: Option<PathBuf>,
    doc: Mutex<ReviewDocument>,
}

impl ReviewStore {
    pub fn in_memory() -> Self {
        let mut doc = ReviewDocument::default();
        doc.seed_if_empty();
        Self {
            path: None,
            doc: Mutex::new(doc),
        }
    }

    /// Load the queue from `path`. Missing, unreadable or malformed files are
    /// logged and treated as an empty store, which is then seeded. A file that
    /// exists but cannot be used is first moved aside so the next write does
    /// not destroy it.
    pub async fn open(path: Option<PathBuf>) -> Self {
        let mut doc = match &path {
            Some(path) => load_document(path).await.unwrap_or_default(),
            None => ReviewDocument::default(),
        };

        let seeded = doc.seed_if_empty();
        if seeded > 0 {
            info!(count = seeded, "Review queue empty, using sample pending events");
        }
        info!(
            pending = doc.pending.len(),
            public = doc.public.len(),
            "Review store ready"
        );

        Self {
            path,
            doc: Mutex::new(doc),
        }
    }

    pub async fn pending(&self) -> Vec<PendingEvent> {
        self.doc.lock().await.pending.clone()
    }

    pub async fn public(&self) -> Vec<PendingEvent> {
        self.doc.lock().await.public.clone()
    }

    pub async fn approve(&self, id: &str) -> AppResult<PendingEvent> {
        let approved = self
            .mutate(|doc| doc.approve(id).ok_or_else(|| not_pending(id)))
            .await?;
        info!(event_id = %id, name = %approved.name, "Event approved");
        Ok(approved)
    }

    pub async fn reject(&self, id: &str) -> AppResult<PendingEvent> {
        let rejected = self
            .mutate(|doc| doc.reject(id).ok_or_else(|| not_pending(id)))
            .await?;
        info!(event_id = %id, name = %rejected.name, "Event rejected");
        Ok(rejected)
    }

    pub async fn submit(&self, event: PendingEvent) -> AppResult<PendingEvent> {
        let id = event.id.clone();
        let queued = self
            .mutate(move |doc| {
                let queued = event.clone();
                if doc.submit(event) {
                    Ok(queued)
                } else {
                    Err(AppError::ValidationError(format!(
                        "An event with id '{}' already exists",
                        queued.id
                    )))
                }
            })
            .await?;
        info!(event_id = %id, name = %queued.name, "Event submitted for review");
        Ok(queued)
    }

    async fn mutate<T, F>(&self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut ReviewDocument) -> AppResult<T>,
    {
        let mut guard = self.doc.lock().await;
        let mut next = guard.clone();
        let out = change(&mut next)?;
        if let Some(path) = &self.path {
            persist(path, &next).await?;
        }
        *guard = next;
        Ok(out)
    }
}

fn not_pending(id: &str) -> AppError {
    AppError::NotFound(format!("No pending event with id '{}'", id))
}

async fn load_document(path: &Path) -> Option<ReviewDocument> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No review document yet");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read review document");
            return None;
        }
    };

    match serde_json::from_str::<ReviewDocument>(&raw) {
        Ok(doc) if doc.version == DOCUMENT_VERSION => return Some(doc),
        Ok(doc) => {
            warn!(
                path = %path.display(),
                version = doc.version,
                "Unsupported review document version, ignoring it"
            );
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error parsing review document");
        }
    }
    set_aside(path).await;
    None
}

/// Rename an unusable document to `<name>.corrupt-<timestamp>`.
async fn set_aside(path: &Path) {
    let mut target = path.as_os_str().to_owned();
    target.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%SZ")));
    let target = PathBuf::from(target);

    match tokio::fs::rename(path, &target).await {
        Ok(()) => warn!(
            path = %path.display(),
            kept_as = %target.display(),
            "Moved unusable review document aside"
        ),
        Err(e) => error!(
            path = %path.display(),
            error = %e,
            "Failed to move unusable review document aside"
        ),
    }
}

async fn persist(path: &Path, doc: &ReviewDocument) -> AppResult<()> {
    let body = serde_json::to_vec_pretty(doc)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, body).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), "Review document written");
    Ok(())
}
