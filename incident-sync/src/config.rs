use std::time::Duration;

pub const LOCAL_BACKEND_URL: &str = "http://localhost:8080";
pub const SERVICE_BACKEND_URL: &str = "http://incidents-backend:8080";

pub fn backend_url_for_host(host: &str) -> String {
    if host.eq_ignore_ascii_case("localhost") {
        LOCAL_BACKEND_URL.to_string()
    } else {
        SERVICE_BACKEND_URL.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub backend_url: String,
    pub poll_interval: Duration,
    pub notice_ttl: Duration,
    pub strict_ordering: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            backend_url: LOCAL_BACKEND_URL.to_string(),
            poll_interval: Duration::from_secs(10),
            notice_ttl: Duration::from_secs(5),
            strict_ordering: false,
        }
    }
}

impl SyncConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("INCIDENT_DASH_HOST").unwrap_or_else(|| "localhost".into());
        let backend_url = lookup("INCIDENT_BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| backend_url_for_host(host.trim()));
        let secs = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .map(Duration::from_secs)
        };

        Self {
            backend_url,
            poll_interval: secs("INCIDENT_POLL_SECS").unwrap_or(defaults.poll_interval),
            notice_ttl: secs("INCIDENT_NOTICE_SECS").unwrap_or(defaults.notice_ttl),
            strict_ordering: lookup("INCIDENT_STRICT_ORDERING")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.strict_ordering),
        }
    }
}
