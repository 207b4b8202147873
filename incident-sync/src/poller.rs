use crate::sync::SyncEngine;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

pub struct Poller {
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn start(engine: SyncEngine, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        info!(period_ms = period.as_millis() as u64, "incident polling started");
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let engine = engine.clone();
                tokio::spawn(async move {
                    let _ = engine.refresh().await;
                });
            }
        });
        Self { task: Some(task) }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("incident polling stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
