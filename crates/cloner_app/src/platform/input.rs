//! Key handling: turns crossterm key events into core messages.
//!
//! Focus and the editor cursor are UI-local; everything else is read from
//! the current [`AppViewModel`].

use cloner_core::{AppViewModel, Msg, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::ui::editor::{self, EditAction, EditorCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    UrlInput,
    Sidebar,
    Editor,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub cursor: EditorCursor,
    /// File the cursor position belongs to.
    cursor_path: Option<String>,
    /// Idle polls so far; drives the loading spinner.
    pub tick: u64,
    pub quit: bool,
}

impl UiState {
    /// Reconciles focus and cursor with a freshly built view.
    pub fn sync(&mut self, view: &AppViewModel) {
        let path = view.editor.as_ref().map(|editor| editor.path.clone());
        if path != self.cursor_path {
            self.cursor = EditorCursor::default();
            self.cursor_path = path;
        }
        if let Some(editor) = &view.editor {
            editor::clamp_to(&editor.content, &mut self.cursor);
        }
        if !available(self.focus, view) {
            self.focus = Focus::UrlInput;
        }
    }
}

/// Maps one key press to at most one message, updating `ui` on the way.
pub fn handle_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                ui.quit = true;
                None
            }
            KeyCode::Char('s') => view.export_enabled.then_some(Msg::ExportClicked),
            KeyCode::Char('x') => view.pipeline.is_busy().then_some(Msg::CancelClicked),
            KeyCode::Char('y') if ui.focus == Focus::Editor && view.editor.is_some() => {
                Some(Msg::CopyClicked)
            }
            KeyCode::Char('u') if ui.focus == Focus::UrlInput => {
                Some(Msg::UrlInputChanged(String::new()))
            }
            _ => None,
        };
    }

    if view.screen == Screen::Failure && key.code == KeyCode::Esc {
        return Some(Msg::ErrorAcknowledged);
    }

    match (ui.focus, key.code) {
        (Focus::Editor, KeyCode::Tab) => {}
        (_, KeyCode::Tab) => {
            ui.focus = cycle(ui.focus, view, true);
            return None;
        }
        (_, KeyCode::BackTab) => {
            ui.focus = cycle(ui.focus, view, false);
            return None;
        }
        _ => {}
    }

    match ui.focus {
        Focus::UrlInput => url_key(key, view),
        Focus::Sidebar => sidebar_key(key, view, ui),
        Focus::Editor => editor_key(key, view, ui),
    }
}

fn url_key(key: KeyEvent, view: &AppViewModel) -> Option<Msg> {
    match key.code {
        KeyCode::Char(ch) if !ch.is_control() => {
            let mut input = view.url_input.clone();
            input.push(ch);
            Some(Msg::UrlInputChanged(input))
        }
        KeyCode::Backspace => {
            let mut input = view.url_input.clone();
            input.pop().map(|_| Msg::UrlInputChanged(input))
        }
        KeyCode::Enter => view.submit_enabled.then_some(Msg::CloneSubmitted),
        _ => None,
    }
}

fn sidebar_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Option<Msg> {
    let entries = &view.sidebar;
    let current = entries.iter().position(|entry| entry.selected);
    let target = match key.code {
        KeyCode::Up | KeyCode::Char('k') => current.map(|idx| idx.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => {
            Some(current.map_or(0, |idx| (idx + 1).min(entries.len().saturating_sub(1))))
        }
        KeyCode::Home => Some(0),
        KeyCode::End => Some(entries.len().saturating_sub(1)),
        KeyCode::Enter | KeyCode::Right => {
            if view.editor.is_some() {
                ui.focus = Focus::Editor;
            }
            return None;
        }
        _ => return None,
    };

    target
        .filter(|idx| Some(*idx) != current)
        .and_then(|idx| entries.get(idx))
        .map(|entry| Msg::FileSelected(entry.path.clone()))
}

fn editor_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Option<Msg> {
    let editor_view = view.editor.as_ref()?;
    let action = match key.code {
        KeyCode::Esc => {
            ui.focus = Focus::Sidebar;
            return None;
        }
        KeyCode::Char(ch) if !ch.is_control() => EditAction::Insert(ch),
        KeyCode::Enter => EditAction::Newline,
        KeyCode::Tab => EditAction::Tab,
        KeyCode::Backspace => EditAction::Backspace,
        KeyCode::Delete => EditAction::Delete,
        KeyCode::Left => EditAction::Left,
        KeyCode::Right => EditAction::Right,
        KeyCode::Up => EditAction::Up,
        KeyCode::Down => EditAction::Down,
        KeyCode::Home => EditAction::Home,
        KeyCode::End => EditAction::End,
        KeyCode::PageUp => EditAction::PageUp,
        KeyCode::PageDown => EditAction::PageDown,
        _ => return None,
    };
    editor::apply(&editor_view.content, &mut ui.cursor, action).map(|content| Msg::FileEdited {
        path: editor_view.path.clone(),
        content,
    })
}

fn available(focus: Focus, view: &AppViewModel) -> bool {
    match focus {
        Focus::UrlInput => true,
        Focus::Sidebar => view.screen == Screen::Workspace && !view.sidebar.is_empty(),
        Focus::Editor => view.screen == Screen::Workspace && view.editor.is_some(),
    }
}

fn cycle(focus: Focus, view: &AppViewModel, forward: bool) -> Focus {
    const ORDER: [Focus; 3] = [Focus::UrlInput, Focus::Sidebar, Focus::Editor];
    let start = ORDER.iter().position(|f| *f == focus).unwrap_or(0);
    (1..=ORDER.len())
        .map(|step| {
            let idx = if forward {
                start + step
            } else {
                start + ORDER.len() * 2 - step
            };
            ORDER[idx % ORDER.len()]
        })
        .find(|candidate| available(*candidate, view))
        .unwrap_or(Focus::UrlInput)
}
