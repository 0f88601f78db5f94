//! Draws one frame from the view model.
//!
//! Pure with respect to the core: nothing here mutates state, and the
//! only UI-local inputs are focus, cursor and the spinner tick.

use cloner_core::{AppViewModel, EditorView, PipelineState, Screen};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use crate::platform::input::{Focus, UiState};

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let areas = layout::screen(frame.area());
    render_header(frame, areas.header, view, ui);
    match view.screen {
        Screen::Landing => render_landing(frame, areas.body),
        Screen::Failure => render_failure(frame, areas.body, view),
        Screen::Workspace => render_workspace(frame, areas.body, view, ui),
    }
    render_status(frame, areas.status, view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let block = Block::bordered().border_style(Style::new().fg(BORDER_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let areas = layout::header(inner);

    let title = Line::from(vec![
        Span::styled(APP_TITLE, Style::new().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(APP_BADGE, Style::new().fg(ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(title), areas.title);

    let submit = format!("[ {} ]", view.submit_label);
    let [input_area, submit_area] = Layout::horizontal([
        Constraint::Min(4),
        Constraint::Length(submit.chars().count() as u16),
    ])
    .spacing(1)
    .areas(areas.url);

    let input = if view.url_input.is_empty() {
        Span::styled(URL_PLACEHOLDER, Style::new().fg(TEXT_MUTED))
    } else {
        Span::raw(view.url_input.as_str())
    };
    let focused = ui.focus == Focus::UrlInput;
    let prompt_style = if focused {
        Style::new().fg(ACCENT)
    } else {
        Style::new().fg(TEXT_MUTED)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled("> ", prompt_style), input])),
        input_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(submit, enabled_style(view.submit_enabled))),
        submit_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("^S {EXPORT_LABEL}"),
            enabled_style(view.export_enabled),
        ))
        .alignment(Alignment::Right),
        areas.export,
    );

    if focused && input_area.width > 2 {
        let typed = view.url_input.chars().count() as u16;
        let x = input_area.x + (2 + typed).min(input_area.width - 1);
        frame.set_cursor_position((x, input_area.y));
    }
}

fn render_landing(frame: &mut Frame, area: Rect) {
    let content = layout::centered(area, 96, 14);
    let [headline, sub, _, cards] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(6),
    ])
    .areas(content);

    let lines = vec![
        Line::from(Span::styled(HEADLINE, Style::new().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            HEADLINE_ACCENT,
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), headline);
    frame.render_widget(
        Paragraph::new(Span::styled(SUBHEADLINE, Style::new().fg(TEXT_SECONDARY)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        sub,
    );

    let card_areas: [Rect; 3] = Layout::horizontal([Constraint::Fill(1); 3])
        .spacing(2)
        .areas(cards);
    for ((title, desc), card) in FEATURE_CARDS.iter().zip(card_areas) {
        let block = Block::bordered()
            .border_style(Style::new().fg(BORDER_DIM))
            .title(Span::styled(*title, Style::new().add_modifier(Modifier::BOLD)));
        frame.render_widget(
            Paragraph::new(Span::styled(*desc, Style::new().fg(TEXT_MUTED)))
                .wrap(Wrap { trim: true })
                .block(block),
            card,
        );
    }
}

fn render_failure(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let panel = layout::centered(area, 64, 10);
    let block = Block::bordered()
        .border_style(Style::new().fg(STATUS_ERROR))
        .title(Span::styled(
            FAILURE_TITLE,
            Style::new().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let message = view.error_message.as_deref().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            "!",
            Style::new().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(message, Style::new().fg(TEXT_SECONDARY))),
        Line::default(),
        Line::from(Span::styled(FAILURE_HINT, Style::new().fg(TEXT_MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        panel,
    );
}

fn render_workspace(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let areas = layout::workspace(area);
    render_sidebar(frame, areas.sidebar, view, ui.focus == Focus::Sidebar);
    match &view.editor {
        Some(editor) => render_editor(frame, areas.editor, editor, ui),
        None => render_editor_placeholder(frame, areas.editor),
    }
    render_preview(frame, areas.preview, view, ui.tick);
}

fn render_sidebar(frame: &mut Frame, area: Rect, view: &AppViewModel, focused: bool) {
    let block = pane_block(focused).title(Span::styled(
        SIDEBAR_TITLE.to_uppercase(),
        Style::new().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);

    let lines: Vec<Line> = view
        .sidebar
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth);
            if entry.selected {
                Line::from(Span::styled(
                    format!("{indent}> {}", entry.name),
                    Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{indent}  {}", entry.name),
                    Style::new().fg(TEXT_SECONDARY),
                ))
            }
        })
        .collect();
    let selected = view.sidebar.iter().position(|entry| entry.selected);
    let offset = layout::scroll_offset(selected.unwrap_or(0), inner.height);

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .block(block),
        area,
    );
}

fn render_editor(frame: &mut Frame, area: Rect, editor: &EditorView, ui: &UiState) {
    let focused = ui.focus == Focus::Editor;
    let block = pane_block(focused).title(Line::from(vec![
        Span::styled(editor.path.as_str(), Style::new().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(EDITOR_BADGE, Style::new().fg(STATUS_OK)),
        Span::styled(format!(" ^Y {COPY_LABEL}"), Style::new().fg(TEXT_MUTED)),
    ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = layout::scroll_offset(ui.cursor.line, inner.height);
    let lines: Vec<Line> = editor
        .content
        .split('\n')
        .enumerate()
        .skip(offset)
        .take(usize::from(inner.height))
        .map(|(idx, text)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", idx + 1, width = usize::from(GUTTER_WIDTH - 1)),
                    Style::new().fg(TEXT_MUTED),
                ),
                Span::raw(text),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && inner.width > GUTTER_WIDTH && inner.height > 0 {
        let column = u16::try_from(ui.cursor.column).unwrap_or(u16::MAX);
        let x = inner.x + GUTTER_WIDTH + column.min(inner.width - GUTTER_WIDTH - 1);
        let y = inner.y + (ui.cursor.line - offset) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn render_editor_placeholder(frame: &mut Frame, area: Rect) {
    let block = pane_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled(EDITOR_WAITING, Style::new().fg(TEXT_MUTED)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout::centered(inner, inner.width, 2),
    );
}

fn render_preview(frame: &mut Frame, area: Rect, view: &AppViewModel, tick: u64) {
    let block = pane_block(false).title(Line::from(vec![
        Span::styled("o o o ", Style::new().fg(TEXT_MUTED)),
        Span::raw(view.preview.address.as_str()),
    ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.preview.loading {
        let spinner = SPINNER[(tick % SPINNER.len() as u64) as usize];
        let lines = vec![
            Line::from(Span::styled(spinner, Style::new().fg(ACCENT))),
            Line::from(Span::styled(PREVIEW_LOADING, Style::new().fg(TEXT_SECONDARY))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            layout::centered(inner, inner.width, 2),
        );
        return;
    }

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            PREVIEW_TITLE,
            Style::new().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(PREVIEW_BLURB, Style::new().fg(TEXT_SECONDARY)))
            .alignment(Alignment::Center),
        Line::default(),
    ];
    lines.extend(PREVIEW_TAGS.iter().map(|tag| {
        Line::from(vec![
            Span::styled("  * ", Style::new().fg(ACCENT)),
            Span::raw(*tag),
        ])
    }));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = vec![
        Span::styled("Status: ", Style::new().fg(TEXT_MUTED)),
        Span::styled(
            view.pipeline.label(),
            Style::new()
                .fg(status_color(&view.pipeline))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(count) = view.file_count {
        spans.push(Span::styled(" | ", Style::new().fg(BORDER_DIM)));
        spans.push(Span::raw(format!("{count} Files Generated")));
    }
    if let Some(notice) = &view.notice {
        spans.push(Span::styled(" | ", Style::new().fg(BORDER_DIM)));
        spans.push(Span::styled(notice.as_str(), Style::new().fg(TEXT_SECONDARY)));
    }

    let [left, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(KEY_HINTS.len() as u16),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(Line::from(spans)), left);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::new().fg(TEXT_MUTED)))
            .alignment(Alignment::Right),
        right,
    );
}

fn pane_block<'a>(focused: bool) -> Block<'a> {
    let color = if focused { ACCENT } else { BORDER_DIM };
    Block::bordered().border_style(Style::new().fg(color))
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(TEXT_MUTED)
    }
}

fn status_color(pipeline: &PipelineState) -> Color {
    match pipeline {
        PipelineState::Ready => STATUS_OK,
        PipelineState::Error { .. } => STATUS_ERROR,
        PipelineState::Idle => TEXT_SECONDARY,
        _ => STATUS_BUSY,
    }
}
