//! Screen areas for the TUI.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::constants::{PREVIEW_PERCENT, SIDEBAR_WIDTH};

/// Areas shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, URL form and export button (bordered).
    pub header: Rect,
    pub body: Rect,
    /// Single-row status line.
    pub status: Rect,
}

/// Header row split into its three controls.
#[derive(Debug, Clone, Copy)]
pub struct HeaderAreas {
    pub title: Rect,
    pub url: Rect,
    pub export: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct WorkspaceAreas {
    pub sidebar: Rect,
    pub editor: Rect,
    pub preview: Rect,
}

pub fn screen(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        header,
        body,
        status,
    }
}

/// Splits the header's inner row.
pub fn header(inner: Rect) -> HeaderAreas {
    let [title, url, export] = Layout::horizontal([
        Constraint::Length(18),
        Constraint::Min(10),
        Constraint::Length(20),
    ])
    .spacing(1)
    .areas(inner);
    HeaderAreas { title, url, export }
}

/// Sidebar | editor | preview.
pub fn workspace(body: Rect) -> WorkspaceAreas {
    let [sidebar, editor, preview] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Fill(1),
        Constraint::Percentage(PREVIEW_PERCENT),
    ])
    .areas(body);
    WorkspaceAreas {
        sidebar,
        editor,
        preview,
    }
}

/// A `width` x `height` box centred in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// First visible line so that `cursor_line` stays inside `height` rows.
pub fn scroll_offset(cursor_line: usize, height: u16) -> usize {
    cursor_line.saturating_sub(usize::from(height.max(1)) - 1)
}
