//! Rendering - Form drawing functions
//!
//! Everything drawn here is read from `AppState`; nothing is mutated.

use crate::presenter::Indicator;
use crate::tui_state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::layout::{self, STAT_LABEL_WIDTH};
use super::utils::{draw_error_popup, draw_help_overlay};

const INPUT_LABEL: &str = "Pokemon Name: ";

/// Draw the whole form
pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let size = f.size();
    let grid = layout::compute_layout(size);

    draw_header(f, grid.header, state);
    draw_input_bar(f, grid.input, state);
    draw_button(f, grid.button, state);
    draw_info_panel(f, grid.info, state);
    draw_stats_panel(f, grid.stats, state);
    draw_status_bar(f, grid.status_bar, state);

    if let Some(notice) = &state.panel.notice {
        draw_error_popup(f, size, notice);
    } else if state.show_help {
        draw_help_overlay(f, size);
    }
}

pub fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let header_text = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Pokemon Information v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Rgb(150, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {}", state.base_url),
            Style::default().fg(Color::Rgb(120, 120, 120)),
        ),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(Color::Rgb(0, 0, 0)));
    f.render_widget(header, area);
}

pub fn draw_input_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let text_style = if state.is_fetching {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(
            INPUT_LABEL,
            Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.input.clone(), text_style),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 180, 255))),
    );
    f.render_widget(input, area);

    if state.input_enabled() && !state.show_help && area.height > 2 {
        f.set_cursor(cursor_column(area, state), area.y + 1);
    }
}

/// Terminal column of the input cursor, by display width, kept inside the border
pub fn cursor_column(area: Rect, state: &AppState) -> u16 {
    let before: String = state.input.chars().take(state.cursor_pos).collect();
    let offset = Span::raw(INPUT_LABEL).width() + Span::raw(before).width();
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    let x = area.x.saturating_add(1).saturating_add(offset);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    x.min(max_x)
}

/// "Get Info" trigger; greyed out while a lookup runs
pub fn draw_button(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.input_enabled() {
        Style::default()
            .fg(Color::Rgb(100, 255, 100))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(Line::from(Span::styled("Get Info", style)))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, area);
}

pub fn draw_info_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.panel;
    let lines = vec![
        Line::from(panel.height_text.clone()),
        Line::from(panel.weight_text.clone()),
        Line::from(panel.types_text.clone()),
    ];

    let info = Paragraph::new(lines).block(
        Block::default()
            .title(" Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 180, 255))),
    );
    f.render_widget(info, area);
}

pub fn draw_stats_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(80, 180, 255)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = layout::stat_rows(inner, state.panel.indicators.len());
    for (row, indicator) in rows.into_iter().zip(state.panel.indicators.iter()) {
        draw_indicator(f, row, indicator);
    }
}

fn draw_indicator(f: &mut Frame, row: Rect, indicator: &Indicator) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(STAT_LABEL_WIDTH), Constraint::Min(0)])
        .split(row);

    f.render_widget(Paragraph::new(indicator.label()), cols[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(Color::Rgb(100, 200, 120))
                .bg(Color::Rgb(40, 40, 40)),
        )
        .ratio(indicator.ratio())
        .label(format!("{}", indicator.value));
    f.render_widget(gauge, cols[1]);
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let text = compose_status_text(state);

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(text, Style::default().fg(Color::Rgb(180, 180, 180))),
    ]))
    .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    f.render_widget(status, area);
}

/// Format: "⠙ Fetching pikachu... | F1: help | Ctrl+C: quit"
pub fn compose_status_text(state: &AppState) -> String {
    let activity = if state.is_fetching {
        format!(
            "{} Fetching {}...",
            state.spinner(),
            state.pending_query.as_deref().unwrap_or("").trim()
        )
    } else if let Some(at) = &state.last_success {
        format!("Last lookup: {}", at)
    } else {
        "Ready".to_string()
    };

    format!("{} | F1: help | Ctrl+C: quit", activity)
}
