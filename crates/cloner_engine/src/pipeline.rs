use std::future::Future;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use cloner_core::GeneratedProject;
use cloner_logging::{cloner_info, cloner_warn};
use tokio_util::sync::CancellationToken;

use crate::generate::ProjectGenerator;
use crate::prompt::GenerationRequest;
use crate::scrape::Scraper;
use crate::{CloneError, EngineEvent, FailureKind, RunId, Stage};

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// "Thinking" pause between scraping and generation. Pure pacing.
    pub analysis_pause: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            analysis_pause: Duration::from_secs(1),
        }
    }
}

/// Receives stage notifications while a run progresses.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Scrape -> pause -> generate, strictly in sequence.
#[derive(Clone)]
pub struct ClonePipeline {
    scraper: Arc<dyn Scraper>,
    generator: Arc<dyn ProjectGenerator>,
    settings: PipelineSettings,
}

impl ClonePipeline {
    pub fn new(
        scraper: Arc<dyn Scraper>,
        generator: Arc<dyn ProjectGenerator>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            scraper,
            generator,
            settings,
        }
    }

    /// Runs one clone to completion, failure, or cancellation.
    ///
    /// `sink` sees `StageEntered` for Scraping, Analyzing and Generating in
    /// that order; a stage is only announced once the previous one succeeded.
    pub async fn run(
        &self,
        run_id: RunId,
        url: &str,
        sink: &dyn EventSink,
        cancel: &CancellationToken,
    ) -> Result<GeneratedProject, CloneError> {
        enter(sink, run_id, Stage::Scraping);
        let snapshot = until_cancelled(cancel, self.scraper.scrape(url))
            .await
            .inspect_err(|err| cloner_warn!("Run {} scrape failed: {}", run_id, err))?;

        enter(sink, run_id, Stage::Analyzing);
        let pause = self.settings.analysis_pause;
        until_cancelled(cancel, async move {
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            Ok(())
        })
        .await?;

        enter(sink, run_id, Stage::Generating);
        let request = GenerationRequest::from_snapshot(&snapshot, url);
        until_cancelled(cancel, self.generator.generate(&request))
            .await
            .inspect_err(|err| cloner_warn!("Run {} generation failed: {}", run_id, err))
    }
}

fn enter(sink: &dyn EventSink, run_id: RunId, stage: Stage) {
    cloner_info!("Run {} entering {:?}", run_id, stage);
    sink.emit(EngineEvent::StageEntered { run_id, stage });
}

async fn until_cancelled<T, F>(cancel: &CancellationToken, work: F) -> Result<T, CloneError>
where
    F: Future<Output = Result<T, CloneError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CloneError::new(FailureKind::Cancelled, "Run cancelled")),
        result = work => result,
    }
}
