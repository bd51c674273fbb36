//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::app::{App, Notice};
use crate::audio::{AudioOutput, PlaybackState};
use crate::browser::FolderBrowser;
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("o", "open folder");
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("p", "play");
    map.insert("space", "pause");
    map.insert("h/l", "prev/next");
    map.insert("s", "stop");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["o", "j/k", "enter", "p", "space", "h/l", "s", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Status line: folder, playback state and the now-playing label.
fn status_text<O: AudioOutput>(app: &App<O>, ui: &UiSettings) -> String {
    let session = &app.session;
    let mut parts: Vec<String> = Vec::new();

    match session.folder() {
        Some(dir) => {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string());
            parts.push(format!("Folder: {} ({} tracks)", name, session.playlist().len()));
        }
        None => parts.push("No folder selected".to_string()),
    }

    parts.push(session.state().label().to_string());

    if let Some(track) = session.now_playing() {
        let name = track.display(ui.track_field);
        if ui.show_elapsed && session.state() != PlaybackState::Idle {
            parts.push(format!(
                "Now Playing: {} [{}]",
                name,
                format_mmss(session.position())
            ));
        } else {
            parts.push(format!("Now Playing: {}", name));
        }
    } else if session.folder().is_some() {
        parts.push("Ready to play".to_string());
    }

    parts.join(" • ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Window of `len` rows around `selected` that fits in `height`, plus the
/// selected row's offset inside it.
fn visible_window(len: usize, selected: usize, height: usize) -> (usize, usize, usize) {
    if len <= height || height == 0 {
        return (0, len, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > len {
        start = len - height;
    }
    (start, start + height, selected - start)
}

fn padded_block<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn draw_tracks<O: AudioOutput>(frame: &mut Frame, area: Rect, app: &App<O>, ui: &UiSettings) {
    let playlist = app.session.playlist();
    let playing = app
        .session
        .now_playing()
        .and_then(|_| playlist.current_index());

    // Only build ListItems for the visible window (avoid allocating the entire list).
    let total = playlist.len();
    let anchor = app.cursor.or(playing).unwrap_or(0);
    let (start, end, selected_in_visible) =
        visible_window(total, anchor, area.height.saturating_sub(2) as usize);

    let items: Vec<ListItem> = playlist.tracks()[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let marker = if playing == Some(start + offset) { "♪ " } else { "  " };
            ListItem::new(format!("{}{}", marker, track.display(ui.track_field)))
        })
        .collect();

    let title = if total == 0 {
        " tracks (press o to pick a folder) ".to_string()
    } else {
        " tracks ".to_string()
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if total > 0 && app.cursor.is_some() {
        state.select(Some(selected_in_visible));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_browser(frame: &mut Frame, area: Rect, browser: &FolderBrowser) {
    let popup = centered_rect_sized(72, 20, area);
    frame.render_widget(Clear, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(popup);

    let current = Paragraph::new(browser.dir().display().to_string())
        .block(padded_block(" choose folder (space selects, esc cancels) "))
        .wrap(Wrap { trim: true });
    frame.render_widget(current, chunks[0]);

    let (start, end, selected_in_visible) = visible_window(
        browser.entries().len(),
        browser.cursor(),
        chunks[1].height.saturating_sub(2) as usize,
    );
    let items: Vec<ListItem> = browser.entries()[start..end]
        .iter()
        .map(|p| {
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string());
            ListItem::new(format!("{}/", name))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" h: up • l/enter: open "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !browser.entries().is_empty() {
        state.select(Some(selected_in_visible));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let popup = centered_rect_sized(60, 7, area);
    frame.render_widget(Clear, popup);

    let body = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from("press any key").italic(),
    ];
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(padded_block(format!(" {} ", notice.title)).bold())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<O: AudioOutput>(frame: &mut Frame, app: &App<O>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadence ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app, ui_settings))
        .block(padded_block(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    draw_tracks(frame, chunks[2], app, ui_settings);

    let footer = Paragraph::new(controls_text())
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    if let Some(browser) = app.browser.as_ref() {
        draw_browser(frame, chunks[2], browser);
    }

    // Notices go on top of everything, including the folder picker.
    if let Some(notice) = app.notice() {
        let area = frame.area();
        draw_notice(frame, area, notice);
    }
}
