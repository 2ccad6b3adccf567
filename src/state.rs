use std::sync::Arc;

use crate::config::Policies;
use crate::store::AttendanceStore;

/// Shared per-worker handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AttendanceStore>,
    pub policies: Policies,
}

impl AppState {
    pub fn new(store: Arc<dyn AttendanceStore>, policies: Policies) -> Self {
        Self { store, policies }
    }
}
