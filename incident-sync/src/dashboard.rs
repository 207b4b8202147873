use crate::backend::{HttpBackend, IncidentBackend};
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::poller::Poller;
use crate::state::{DashboardState, Shared};
use crate::submission::{SubmissionController, SubmitOutcome};
use crate::sync::SyncEngine;
use incident_model::{Filter, Incident};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

pub struct Dashboard {
    shared: Arc<Shared>,
    engine: SyncEngine,
    submissions: SubmissionController,
    poll_interval: Duration,
    poller: Option<Poller>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn IncidentBackend>, config: &SyncConfig) -> Self {
        let shared = Shared::new();
        let engine = SyncEngine::new(backend.clone(), shared.clone(), config.strict_ordering);
        let submissions =
            SubmissionController::new(backend, shared.clone(), engine.clone(), config.notice_ttl);
        Self {
            shared,
            engine,
            submissions,
            poll_interval: config.poll_interval,
            poller: None,
        }
    }

    pub fn connect(config: &SyncConfig) -> Self {
        info!(backend = %config.backend_url, "connecting dashboard");
        Self::new(Arc::new(HttpBackend::new(config.backend_url.clone())), config)
    }

    pub fn start(&mut self) {
        if self.poller.is_some() || !self.shared.is_live() {
            return;
        }
        self.poller = Some(Poller::start(self.engine.clone(), self.poll_interval));
    }

    pub fn teardown(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
        self.submissions.cancel_expiry();
        if self.shared.tear_down() {
            info!("dashboard torn down");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(Poller::is_running)
    }

    pub fn snapshot(&self) -> DashboardState {
        self.shared.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.shared.subscribe()
    }

    pub fn visible(&self) -> Vec<Incident> {
        self.shared
            .read(|state| state.visible().into_iter().cloned().collect())
    }

    pub fn set_filter(&self, filter: Filter) {
        self.shared.apply(|state| {
            if state.filter == filter {
                return false;
            }
            state.filter = filter;
            true
        });
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.shared.apply(|state| {
            if state.draft == text {
                return false;
            }
            state.draft = text;
            true
        });
    }

    pub fn can_submit(&self) -> bool {
        self.shared.read(DashboardState::can_submit)
    }

    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.shared.read(|state| state.draft.clone());
        self.submissions.submit(&draft).await
    }

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.submissions.submit(text).await
    }

    pub async fn refresh(&self) -> Result<(), SyncError> {
        self.engine.refresh().await
    }

    pub fn engine(&self) -> SyncEngine {
        self.engine.clone()
    }

    pub fn submissions(&self) -> SubmissionController {
        self.submissions.clone()
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.teardown();
    }
}
