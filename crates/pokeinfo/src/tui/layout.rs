//! Layout - Form grid
//!
//! Header, input row, then Info (left) beside Stats (right), then the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub info: Rect,
    pub stats: Rect,
    pub status_bar: Rect,
}

const HEADER_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const STATUS_BAR_HEIGHT: u16 = 1;
const BUTTON_WIDTH: u16 = 14;

/// Six gauge rows plus borders
pub const STATS_HEIGHT: u16 = 8;

/// Three label rows plus borders
pub const INFO_HEIGHT: u16 = 5;

/// Stat label column width ("Special Defense:" + padding)
pub const STAT_LABEL_WIDTH: u16 = 17;

pub fn compute_layout(area: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);

    FormLayout {
        header: rows[0],
        input: input_row[0],
        button: input_row[1],
        info: clamp_height(body[0], INFO_HEIGHT),
        stats: clamp_height(body[1], STATS_HEIGHT),
        status_bar: rows[3],
    }
}

/// Keep panels at their natural height instead of stretching
fn clamp_height(area: Rect, height: u16) -> Rect {
    Rect {
        height: area.height.min(height),
        ..area
    }
}

/// One row per stat inside the stats block
pub fn stat_rows(inner: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| i as u16)
        .take_while(|&i| i < inner.height)
        .map(|i| Rect {
            x: inner.x,
            y: inner.y + i,
            width: inner.width,
            height: 1,
        })
        .collect()
}
