use crate::backend::IncidentBackend;
use crate::error::SyncError;
use crate::state::{Shared, SubmissionState};
use crate::sync::SyncEngine;
use incident_model::Classification;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Pending,
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    Accepted(Classification),
    Failed(SyncError),
}

#[derive(Clone)]
pub struct SubmissionController {
    backend: Arc<dyn IncidentBackend>,
    shared: Arc<Shared>,
    engine: SyncEngine,
    notice_ttl: Duration,
    expiry: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SubmissionController {
    pub(crate) fn new(
        backend: Arc<dyn IncidentBackend>,
        shared: Arc<Shared>,
        engine: SyncEngine,
        notice_ttl: Duration,
    ) -> Self {
        Self {
            backend,
            shared,
            engine,
            notice_ttl,
            expiry: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let message = text.trim();
        if message.is_empty() {
            debug!("ignoring blank submission");
            return SubmitOutcome::Skipped(SkipReason::Blank);
        }
        if !self.shared.is_live() {
            return SubmitOutcome::Skipped(SkipReason::Closed);
        }

        let started = self.shared.apply(|state| {
            if state.submission.is_pending() {
                return false;
            }
            state.submission = SubmissionState::Pending;
            true
        });
        if !started {
            debug!("submission already pending");
            return SubmitOutcome::Skipped(SkipReason::Pending);
        }
        let mut guard = PendingGuard {
            shared: self.shared.clone(),
            armed: true,
        };
        self.cancel_expiry();

        info!(chars = message.chars().count(), "submitting incident");
        let reply = self.backend.ingest(message).await;
        guard.armed = false;
        match reply {
            Ok(result) => {
                let generation = self.shared.next_generation();
                let notice = result.clone();
                let shown = self.shared.apply(|state| {
                    state.submission = SubmissionState::LastResult {
                        generation,
                        result: notice,
                    };
                    state.draft.clear();
                    true
                });
                info!(
                    category = %result.category,
                    severity = %result.severity,
                    action = %result.action,
                    "incident processed"
                );
                if shown {
                    self.schedule_expiry(generation);
                    let _ = self.engine.refresh().await;
                }
                SubmitOutcome::Accepted(result)
            }
            Err(err) => {
                warn!(error = %err, "incident submission failed");
                let recorded = err.clone();
                self.shared.apply(|state| {
                    state.submission = SubmissionState::Failed(recorded);
                    true
                });
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn schedule_expiry(&self, generation: u64) {
        let shared = self.shared.clone();
        let ttl = self.notice_ttl;
        let task = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let expired = shared.apply(|state| match &state.submission {
                SubmissionState::LastResult { generation: shown, .. } if *shown == generation => {
                    state.submission = SubmissionState::Idle;
                    true
                }
                _ => false,
            });
            if expired {
                debug!(generation, "processed notice expired");
            }
        });
        let previous = self
            .expiry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    pub(crate) fn cancel_expiry(&self) {
        let task = self
            .expiry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.abort();
        }
    }
}

// Clears `Pending` when a submit future is dropped before the backend answers.
struct PendingGuard {
    shared: Arc<Shared>,
    armed: bool,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let cleared = self.shared.apply(|state| {
            if !state.submission.is_pending() {
                return false;
            }
            state.submission = SubmissionState::Idle;
            true
        });
        if cleared {
            debug!("abandoned submission cleared");
        }
    }
}
