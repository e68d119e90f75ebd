//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Persistent Status/Error Display
//!
//! Last error or status message on the left, selected count (with the total
//! size of the selection) and pending count on the right. A spinner-ish note
//! shows while the transfer task is running.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::size::format_size;
use crate::model::app_state::AppState;
use crate::model::transfer::TransferPhase;
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let status_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::COMMENT));
        frame.render_widget(status_block, area);
        let inner = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        let (msg, style) = if let Some(ref err) = app.last_error {
            (
                format!("🔥 {err}"),
                Style::default().fg(theme::RED).bold(),
            )
        } else if app.transfer == TransferPhase::Processing {
            (
                "Moving files… (Esc cancels after the current one)".to_owned(),
                Style::default().fg(theme::ORANGE),
            )
        } else if let Some(ref status) = app.last_status {
            (status.clone(), Style::default().fg(theme::GREEN))
        } else {
            (
                "Space select · a select all · Enter move · ? help · q quit".to_owned(),
                Style::default().fg(theme::COMMENT),
            )
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let left = Paragraph::new(Line::from(Span::styled(format!(" {msg}"), style)))
            .alignment(Alignment::Left);

        let right_text = if app.catalog.has_selection() {
            format!(
                "{} selected ({}) · {} pending ",
                app.catalog.selected_count(),
                format_size(app.catalog.selected_bytes()),
                app.catalog.len()
            )
        } else {
            format!(
                "{} selected · {} pending ",
                app.catalog.selected_count(),
                app.catalog.len()
            )
        };
        let right = Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(theme::PURPLE),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //
