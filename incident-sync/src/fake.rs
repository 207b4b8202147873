use crate::backend::IncidentBackend;
use crate::error::SyncError;
use futures::future::BoxFuture;
use futures::FutureExt;
use incident_model::{Classification, Incident};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub(crate) fn incident(id: u64, message: &str, severity: Option<&str>) -> Incident {
    Incident {
        id: id.to_string().as_str().into(),
        message: message.into(),
        category: "infra".into(),
        severity: severity.map(ToString::to_string),
        action: None,
        created_at: "2024-01-01T00:00:00Z".into(),
    }
}

pub(crate) fn classification(category: &str, severity: &str, action: &str) -> Classification {
    Classification {
        category: category.into(),
        severity: severity.into(),
        action: action.into(),
    }
}

type Scripted<T> = (Result<T, SyncError>, Option<oneshot::Receiver<()>>);

pub(crate) struct Gate(oneshot::Sender<()>);

impl Gate {
    pub(crate) fn release(self) {
        let _ = self.0.send(());
    }
}

pub(crate) struct FakeBackend {
    incidents: Mutex<Result<Vec<Incident>, SyncError>>,
    ingest_reply: Mutex<Result<Classification, SyncError>>,
    list_queue: Mutex<VecDeque<Scripted<Vec<Incident>>>>,
    ingest_queue: Mutex<VecDeque<Scripted<Classification>>>,
    list_calls: AtomicUsize,
    ingest_calls: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            incidents: Mutex::new(Ok(Vec::new())),
            ingest_reply: Mutex::new(Ok(Classification::default())),
            list_queue: Mutex::new(VecDeque::new()),
            ingest_queue: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            ingest_calls: AtomicUsize::new(0),
            messages: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub(crate) fn set_incidents(&self, incidents: Vec<Incident>) {
        *self.incidents.lock().expect("lock") = Ok(incidents);
    }

    pub(crate) fn fail_lists(&self, err: SyncError) {
        *self.incidents.lock().expect("lock") = Err(err);
    }

    pub(crate) fn set_ingest_reply(&self, reply: Result<Classification, SyncError>) {
        *self.ingest_reply.lock().expect("lock") = reply;
    }

    pub(crate) fn gate_next_list(&self, incidents: Vec<Incident>) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.list_queue
            .lock()
            .expect("lock")
            .push_back((Ok(incidents), Some(rx)));
        Gate(tx)
    }

    pub(crate) fn gate_next_ingest(&self, reply: Result<Classification, SyncError>) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.ingest_queue
            .lock()
            .expect("lock")
            .push_back((reply, Some(rx)));
        Gate(tx)
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn ingest_calls(&self) -> usize {
        self.ingest_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }

    pub(crate) async fn wait_for_list_calls(&self, n: usize) {
        while self.list_calls() < n {
            tokio::task::yield_now().await;
        }
    }

    pub(crate) async fn wait_for_ingest_calls(&self, n: usize) {
        while self.ingest_calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

async fn settle<T>(scripted: Scripted<T>) -> Result<T, SyncError> {
    let (reply, gate) = scripted;
    if let Some(gate) = gate {
        let _ = gate.await;
    }
    reply
}

impl IncidentBackend for FakeBackend {
    fn list_incidents(&self) -> BoxFuture<'_, Result<Vec<Incident>, SyncError>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .list_queue
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| (self.incidents.lock().expect("lock").clone(), None));
        settle(scripted).boxed()
    }

    fn ingest<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<Classification, SyncError>> {
        self.ingest_calls.fetch_add(1, Ordering::SeqCst);
        self.messages.lock().expect("lock").push(message.to_string());
        let scripted = self
            .ingest_queue
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| (self.ingest_reply.lock().expect("lock").clone(), None));
        settle(scripted).boxed()
    }
}
