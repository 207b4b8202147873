use crate::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned identifier. The backend sends integers today; the client
/// treats the value as opaque and keeps its textual form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IncidentId(pub String);

impl<'de> Deserialize<'de> for IncidentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let id = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        Ok(Self(id))
    }
}

impl std::fmt::Display for IncidentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IncidentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(default)]
    pub id: IncidentId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl Incident {
    pub fn severity(&self) -> Option<Severity> {
        self.severity.as_deref().and_then(Severity::parse)
    }

    pub fn created_at_display(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(ts) => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub severity: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
