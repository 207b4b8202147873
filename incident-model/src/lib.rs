pub mod filter;
pub mod incident;
pub mod severity;
pub mod stats;

pub use filter::{visible, Filter};
pub use incident::{Classification, Incident, IncidentId};
pub use severity::{accent_for, icon_for, label_upper, Severity, DEFAULT_ICON};
pub use stats::{aggregate, StatsSummary};
