use std::fmt;

use crate::view_model::AppViewModel;
use crate::Session;

pub type RunId = u64;

/// In-flight stages of a clone run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scraping,
    Analyzing,
    Generating,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Scraping => Some(Stage::Analyzing),
            Stage::Analyzing => Some(Stage::Generating),
            Stage::Generating => None,
        }
    }
}

/// Where the clone pipeline currently is. Exactly one state is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Scraping,
    Analyzing,
    Generating,
    Ready,
    Error {
        message: String,
    },
}

impl PipelineState {
    /// A run is in flight.
    pub fn is_busy(&self) -> bool {
        self.stage().is_some()
    }

    /// A new submission may start a run.
    pub fn accepts_submission(&self) -> bool {
        !self.is_busy()
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Scraping => Some(Stage::Scraping),
            PipelineState::Analyzing => Some(Stage::Analyzing),
            PipelineState::Generating => Some(Stage::Generating),
            PipelineState::Idle | PipelineState::Ready | PipelineState::Error { .. } => None,
        }
    }

    /// Label for the submit button in this state.
    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Processing..."
        } else {
            "Clone UI"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "IDLE",
            PipelineState::Scraping => "SCRAPING",
            PipelineState::Analyzing => "ANALYZING",
            PipelineState::Generating => "GENERATING",
            PipelineState::Ready => "READY",
            PipelineState::Error { .. } => "ERROR",
        }
    }
}

impl From<Stage> for PipelineState {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Scraping => PipelineState::Scraping,
            Stage::Analyzing => PipelineState::Analyzing,
            Stage::Generating => PipelineState::Generating,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: Session,
    url_input: String,
    active_run: Option<RunId>,
    next_run_id: RunId,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(&self.session, &self.url_input, self.notice.as_deref(), self.dirty)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub(crate) fn set_url_input(&mut self, input: String) {
        if self.url_input != input {
            self.url_input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn allocate_run(&mut self) -> RunId {
        self.next_run_id += 1;
        self.active_run = Some(self.next_run_id);
        self.next_run_id
    }

    /// True when `run_id` belongs to the run currently in flight.
    pub(crate) fn is_active_run(&self, run_id: RunId) -> bool {
        self.active_run == Some(run_id)
    }

    pub(crate) fn clear_active_run(&mut self) -> Option<RunId> {
        self.active_run.take()
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
