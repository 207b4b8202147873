use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON: &str = "✅";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🚨",
            Self::High => "⚠️",
            Self::Medium => "ℹ️",
            Self::Low => DEFAULT_ICON,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to an incident. Never fails: unknown or absent
/// severities get [`DEFAULT_ICON`].
pub fn icon_for(severity: Option<&str>) -> &'static str {
    severity
        .and_then(Severity::parse)
        .map(Severity::icon)
        .unwrap_or(DEFAULT_ICON)
}

pub fn accent_for(severity: Option<&str>) -> &'static str {
    match severity.and_then(Severity::parse) {
        Some(Severity::Critical) => "#ef4444",
        Some(Severity::High) => "#f97316",
        Some(Severity::Medium) => "#eab308",
        _ => "#22c55e",
    }
}

pub fn label_upper(severity: Option<&str>) -> String {
    severity.unwrap_or_default().to_uppercase()
}
