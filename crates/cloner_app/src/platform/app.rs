use std::path::Path;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use cloner_core::{update, AppState, AppViewModel, Msg};
use cloner_engine::{
    ClonePipeline, EngineHandle, GeminiGenerator, GeneratorSettings, MockScraper, PipelineSettings,
};
use cloner_logging::{cloner_info, cloner_warn};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::input::{self, UiState};
use super::logging;
use super::ui;
use super::ui::constants::POLL_INTERVAL;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(Path::new(logging::LOG_FILE));

    let settings = GeneratorSettings::from_env();
    if settings.api_key.is_none() {
        cloner_warn!("No API key in GEMINI_API_KEY or API_KEY; generation will fail");
    }
    cloner_info!("Starting with {:?}", settings);

    let generator = GeminiGenerator::new(settings).context("failed to build model client")?;
    let pipeline = ClonePipeline::new(
        Arc::new(MockScraper::default()),
        Arc::new(generator),
        PipelineSettings::default(),
    );
    let engine = EngineHandle::new(pipeline).context("failed to start engine")?;
    let export_dir = std::env::current_dir().context("failed to resolve working directory")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(engine, export_dir, msg_tx);

    install_panic_hook();
    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let result = event_loop(&mut terminal, &msg_rx, &effects);
    ratatui::restore();
    cloner_info!("Shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    msg_rx: &mpsc::Receiver<Msg>,
    effects: &EffectRunner,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut ui_state = UiState::default();
    let mut view = state.view();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            terminal.draw(|frame| ui::render::render(frame, &view, &ui_state))?;
            needs_draw = false;
        }

        // Engine news lands first so a key is mapped against the newest view.
        let pending: Vec<Msg> = msg_rx.try_iter().collect();
        state = dispatch(state, pending, effects);
        refresh(&mut state, &mut view, &mut ui_state, &mut needs_draw);

        let mut inbox = Vec::new();
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    inbox.extend(input::handle_key(key, &view, &mut ui_state));
                    needs_draw = true;
                }
                Event::Resize(..) => needs_draw = true,
                _ => {}
            }
        } else {
            ui_state.tick = ui_state.tick.wrapping_add(1);
            needs_draw |= view.preview.loading;
            inbox.push(Msg::Tick);
        }

        if ui_state.quit {
            return Ok(());
        }

        state = dispatch(state, inbox, effects);
        refresh(&mut state, &mut view, &mut ui_state, &mut needs_draw);
    }
}

/// Rebuilds the view when the state changed since the last look.
fn refresh(state: &mut AppState, view: &mut AppViewModel, ui: &mut UiState, needs_draw: &mut bool) {
    if state.consume_dirty() {
        *view = state.view();
        ui.sync(view);
        *needs_draw = true;
    }
}

fn dispatch(mut state: AppState, inbox: Vec<Msg>, effects: &EffectRunner) -> AppState {
    for msg in inbox {
        let (next, fx) = update(state, msg);
        state = next;
        effects.run(fx);
    }
    state
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
