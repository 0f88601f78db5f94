use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use cloner_logging::{cloner_info, cloner_warn};
use tokio_util::sync::CancellationToken;

use crate::pipeline::{ChannelEventSink, ClonePipeline};
use crate::{EngineEvent, RunId};

enum EngineCommand {
    Start { run_id: RunId, url: String },
    Cancel { run_id: RunId },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

struct ActiveRun {
    run_id: RunId,
    token: CancellationToken,
}

type ActiveSlot = Arc<Mutex<Option<ActiveRun>>>;

/// Owns the async runtime that executes clone runs. At most one run is in
/// flight; progress and results come back through [`EngineHandle::recv_timeout`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(pipeline: ClonePipeline) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("cloner-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let active: ActiveSlot = Arc::new(Mutex::new(None));
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&runtime, &pipeline, &active, &event_tx, command);
            }
            cloner_info!("Engine command channel closed; shutting down");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn start(&self, run_id: RunId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Start {
            run_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { run_id });
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        let rx = self.event_rx.lock().unwrap_or_else(PoisonError::into_inner);
        rx.recv_timeout(timeout).ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    pipeline: &ClonePipeline,
    active: &ActiveSlot,
    event_tx: &mpsc::Sender<EngineEvent>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::Start { run_id, url } => {
            let token = CancellationToken::new();
            {
                let mut slot = active.lock().unwrap_or_else(PoisonError::into_inner);
                if let Some(current) = slot.as_ref() {
                    cloner_warn!(
                        "Ignoring run {} for {}: run {} still in flight",
                        run_id,
                        url,
                        current.run_id
                    );
                    return;
                }
                *slot = Some(ActiveRun {
                    run_id,
                    token: token.clone(),
                });
            }

            let pipeline = pipeline.clone();
            let active = active.clone();
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let sink = ChannelEventSink::new(event_tx.clone());
                let result = pipeline.run(run_id, &url, &sink, &token).await;
                {
                    let mut slot = active.lock().unwrap_or_else(PoisonError::into_inner);
                    if slot.as_ref().is_some_and(|run| run.run_id == run_id) {
                        *slot = None;
                    }
                }
                let _ = event_tx.send(EngineEvent::RunCompleted { run_id, result });
            });
        }
        EngineCommand::Cancel { run_id } => {
            let mut slot = active.lock().unwrap_or_else(PoisonError::into_inner);
            match slot.take() {
                Some(run) if run.run_id == run_id => {
                    cloner_info!("Cancelling run {}", run_id);
                    run.token.cancel();
                }
                other => *slot = other,
            }
        }
    }
}
