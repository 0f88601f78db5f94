use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use cloner_core::{Effect, Msg, Stage};
use cloner_engine::{export_project, EngineEvent, EngineHandle, FailureKind};
use cloner_logging::{cloner_info, cloner_warn};

const EVENT_WAIT: Duration = Duration::from_millis(100);

/// Executes effects from the core and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    export_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
    /// Opened on first copy and kept so the selection outlives the call.
    clipboard: RefCell<Option<arboard::Clipboard>>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, export_dir: PathBuf, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self {
            engine,
            export_dir,
            msg_tx,
            clipboard: RefCell::new(None),
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartClone { run_id, url } => {
                    cloner_info!("StartClone run_id={} url={}", run_id, url);
                    self.engine.start(run_id, url);
                }
                Effect::CancelClone { run_id } => {
                    cloner_info!("CancelClone run_id={}", run_id);
                    self.engine.cancel(run_id);
                }
                Effect::ExportProject { project } => {
                    let outcome = export_project(&self.export_dir, &project)
                        .map(|summary| {
                            format!(
                                "{} ({} files, {})",
                                summary.output_path.display(),
                                summary.file_count,
                                Local::now().format("%H:%M:%S")
                            )
                        })
                        .map_err(|err| {
                            cloner_warn!("Export failed: {}", err);
                            err.to_string()
                        });
                    let _ = self.msg_tx.send(Msg::ExportFinished(outcome));
                }
                Effect::CopyToClipboard { path, content } => {
                    let outcome = self.copy_text(content).map(|()| path).map_err(|err| {
                        cloner_warn!("Clipboard write failed: {}", err);
                        err.to_string()
                    });
                    let _ = self.msg_tx.send(Msg::CopyFinished(outcome));
                }
            }
        }
    }

    fn copy_text(&self, text: String) -> Result<(), arboard::Error> {
        let mut slot = self.clipboard.borrow_mut();
        let mut clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let result = clipboard.set_text(text);
        *slot = Some(clipboard);
        result
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(EVENT_WAIT) else {
                continue;
            };
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::StageEntered { run_id, stage } => Msg::PipelineProgress {
            run_id,
            stage: map_stage(stage),
        },
        EngineEvent::RunCompleted { run_id, result } => match result {
            Ok(project) => Msg::CloneSucceeded { run_id, project },
            Err(err) => {
                if err.kind != FailureKind::Cancelled {
                    cloner_warn!("Run {} failed: {}", run_id, err);
                }
                Msg::CloneFailed {
                    run_id,
                    message: err.user_message(),
                }
            }
        },
    }
}

fn map_stage(stage: cloner_engine::Stage) -> Stage {
    match stage {
        cloner_engine::Stage::Scraping => Stage::Scraping,
        cloner_engine::Stage::Analyzing => Stage::Analyzing,
        cloner_engine::Stage::Generating => Stage::Generating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloner_core::GeneratedProject;
    use cloner_engine::{CloneError, INVALID_FORMAT_MESSAGE};
    use pretty_assertions::assert_eq;

    #[test]
    fn stage_events_become_progress() {
        let msg = map_event(EngineEvent::StageEntered {
            run_id: 4,
            stage: cloner_engine::Stage::Generating,
        });
        assert_eq!(
            msg,
            Msg::PipelineProgress {
                run_id: 4,
                stage: Stage::Generating
            }
        );
    }

    #[test]
    fn completion_carries_project_or_user_message() {
        let project = GeneratedProject::from_entries([("app/page.tsx", "x")]);
        assert_eq!(
            map_event(EngineEvent::RunCompleted {
                run_id: 2,
                result: Ok(project.clone()),
            }),
            Msg::CloneSucceeded { run_id: 2, project }
        );

        assert_eq!(
            map_event(EngineEvent::RunCompleted {
                run_id: 3,
                result: Err(CloneError::new(FailureKind::InvalidFormat, "EOF at 1:1")),
            }),
            Msg::CloneFailed {
                run_id: 3,
                message: INVALID_FORMAT_MESSAGE.to_string()
            }
        );
    }
}
