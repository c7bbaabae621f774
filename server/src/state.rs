use std::sync::Arc;

use crate::catalog::sample_events;
use crate::config::Config;
use crate::models::event::Event;
use crate::review::ReviewStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Vec<Event>>,
    pub store: Arc<ReviewStore>,
}

impl AppState {
    pub fn new(config: Config, store: ReviewStore) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(sample_events()),
            store: Arc::new(store),
        }
    }
}
