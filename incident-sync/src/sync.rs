use crate::backend::IncidentBackend;
use crate::error::SyncError;
use crate::state::Shared;
use incident_model::aggregate;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct SyncEngine {
    backend: Arc<dyn IncidentBackend>,
    shared: Arc<Shared>,
    strict_ordering: bool,
}

impl SyncEngine {
    pub(crate) fn new(
        backend: Arc<dyn IncidentBackend>,
        shared: Arc<Shared>,
        strict_ordering: bool,
    ) -> Self {
        Self {
            backend,
            shared,
            strict_ordering,
        }
    }

    /// Last completion wins unless strict ordering is on.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let seq = self.shared.next_request();
        let strict = self.strict_ordering;
        let shared = &self.shared;
        debug!(seq, "fetching incidents");

        match self.backend.list_incidents().await {
            Ok(incidents) => {
                let stats = aggregate(&incidents);
                let count = incidents.len();
                let applied = self.shared.apply(|state| {
                    if strict && !shared.claim_latest(seq) {
                        return false;
                    }
                    state.incidents = incidents;
                    state.stats = stats;
                    state.fetch_error = None;
                    state.revision = seq;
                    true
                });
                if applied {
                    info!(seq, incidents = count, critical = stats.critical, "incidents refreshed");
                } else {
                    debug!(seq, "refresh result discarded");
                }
                Ok(())
            }
            Err(err) => {
                warn!(seq, error = %err, "incident refresh failed");
                let recorded = err.clone();
                self.shared.apply(|state| {
                    if strict && !shared.claim_latest(seq) {
                        return false;
                    }
                    state.fetch_error = Some(recorded);
                    true
                });
                Err(err)
            }
        }
    }
}
