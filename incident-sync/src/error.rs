use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("cannot connect to backend: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}")]
    Server { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl SyncError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn refresh_message(&self) -> String {
        match self {
            Self::Transport(_) => "Cannot connect to backend".to_string(),
            Self::Server { status } => {
                format!("Cannot load incidents: backend returned HTTP {status}")
            }
            Self::Decode(_) => "Cannot load incidents: unexpected response from backend".to_string(),
        }
    }

    pub fn submit_message(&self) -> String {
        match self {
            Self::Transport(_) => "Failed to submit incident: cannot connect to backend".to_string(),
            Self::Server { status } => {
                format!("Failed to submit incident: backend returned HTTP {status}")
            }
            Self::Decode(_) => {
                "Failed to submit incident: unexpected response from backend".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
