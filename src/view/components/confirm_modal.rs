//! src/view/components/confirm_modal.rs
//! ============================================================================
//! # ConfirmModal: Transfer Confirmation Dialog
//!
//! Shown while the workflow is in the Confirming phase. Lists the first few
//! queued names so the user can see what is about to "move".

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::size::format_size;
use crate::model::app_state::AppState;
use crate::view::theme;

const PREVIEW_ROWS: usize = 5;

pub struct ConfirmModal;

impl ConfirmModal {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let queued = app.catalog.selected_in_order();
        let dest = app.active_destination();

        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Move {} file(s) ({}) to {}?",
                    queued.len(),
                    format_size(app.catalog.selected_bytes()),
                    dest.name
                ),
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                dest.path.clone(),
                Style::default().fg(theme::COMMENT),
            )),
            Line::from(""),
        ];

        for id in queued.iter().take(PREVIEW_ROWS) {
            if let Some(entry) = app.catalog.get(id) {
                lines.push(Line::from(format!("  • {}", entry.name)));
            }
        }
        if queued.len() > PREVIEW_ROWS {
            lines.push(Line::from(Span::styled(
                format!("  … and {} more", queued.len() - PREVIEW_ROWS),
                Style::default().fg(theme::COMMENT),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[y/Enter] move   [n/Esc] cancel",
            Style::default().fg(theme::GREEN),
        )));

        let para = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::PURPLE))
                .style(Style::default().bg(theme::BACKGROUND))
                .title(" Confirm "),
        );
        frame.render_widget(para, area);
    }
}
