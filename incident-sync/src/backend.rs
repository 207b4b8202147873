use crate::error::SyncError;
use futures::future::BoxFuture;
use futures::FutureExt;
use incident_model::{Classification, Incident};
use tracing::debug;

pub trait IncidentBackend: Send + Sync + 'static {
    fn list_incidents(&self) -> BoxFuture<'_, Result<Vec<Incident>, SyncError>>;

    fn ingest<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<Classification, SyncError>>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_incidents(&self) -> Result<Vec<Incident>, SyncError> {
        let url = self.url("/incidents");
        debug!(%url, "GET");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Server {
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        decode_incidents(&body)
    }

    async fn post_ingest(&self, message: &str) -> Result<Classification, SyncError> {
        let url = self.url("/ingest");
        debug!(%url, "POST");
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Server {
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SyncError::decode(e.to_string()))
    }
}

impl IncidentBackend for HttpBackend {
    fn list_incidents(&self) -> BoxFuture<'_, Result<Vec<Incident>, SyncError>> {
        self.fetch_incidents().boxed()
    }

    fn ingest<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<Classification, SyncError>> {
        self.post_ingest(message).boxed()
    }
}

/// Decodes a `/incidents` body. An empty body or JSON `null` is an empty list.
pub fn decode_incidents(body: &[u8]) -> Result<Vec<Incident>, SyncError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice::<Option<Vec<Incident>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| SyncError::decode(e.to_string()))
}
