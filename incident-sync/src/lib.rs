pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod poller;
pub mod state;
pub mod submission;
pub mod sync;

#[cfg(test)]
mod fake;

pub use backend::{HttpBackend, IncidentBackend};
pub use config::SyncConfig;
pub use dashboard::Dashboard;
pub use error::SyncError;
pub use poller::Poller;
pub use state::{DashboardState, SubmissionState};
pub use submission::{SkipReason, SubmissionController, SubmitOutcome};
pub use sync::SyncEngine;
