use crate::error::SyncError;
use incident_model::{visible, Classification, Filter, Incident, StatsSummary};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    LastResult {
        generation: u64,
        result: Classification,
    },
    Failed(SyncError),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn last_result(&self) -> Option<&Classification> {
        match self {
            Self::LastResult { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.submit_message()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub incidents: Vec<Incident>,
    pub stats: StatsSummary,
    pub fetch_error: Option<SyncError>,
    pub submission: SubmissionState,
    pub filter: Filter,
    pub draft: String,
    pub revision: u64,
}

impl DashboardState {
    pub fn visible(&self) -> Vec<&Incident> {
        visible(&self.incidents, self.filter)
    }

    pub fn banner(&self) -> Option<String> {
        self.fetch_error.as_ref().map(SyncError::refresh_message)
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() && !self.submission.is_pending()
    }
}

pub(crate) struct Shared {
    state: watch::Sender<DashboardState>,
    live: AtomicBool,
    issued: AtomicU64,
    applied: AtomicU64,
    generation: AtomicU64,
}

impl Shared {
    pub(crate) fn new() -> Arc<Self> {
        let (state, _) = watch::channel(DashboardState::default());
        Arc::new(Self {
            state,
            live: AtomicBool::new(true),
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
            generation: AtomicU64::new(0),
        })
    }

    pub(crate) fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    pub(crate) fn tear_down(&self) -> bool {
        self.live.swap(false, Ordering::SeqCst)
    }

    pub(crate) fn next_request(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Records `seq` as the newest applied fetch outcome, success or failure.
    // False when a newer one was already applied.
    pub(crate) fn claim_latest(&self, seq: u64) -> bool {
        self.applied.fetch_max(seq, Ordering::SeqCst) <= seq
    }

    pub(crate) fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Applies `f` as one atomic update and notifies subscribers when it
    /// returns true. Inert once torn down.
    pub(crate) fn apply(&self, f: impl FnOnce(&mut DashboardState) -> bool) -> bool {
        if !self.is_live() {
            return false;
        }
        self.state.send_if_modified(f)
    }
}
