//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! Each draw cycle lays out header, toolbar, table, destination bar, and
//! status bar, then stacks any active overlay (help or the confirm modal) in
//! a centered box.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::model::app_state::{AppState, Overlay};
use crate::model::transfer::TransferPhase;
use crate::view::components::confirm_modal::ConfirmModal;
use crate::view::components::destination_bar::DestinationBar;
use crate::view::components::file_table::FileTable;
use crate::view::components::help_overlay::HelpOverlay;
use crate::view::components::status_bar::StatusBar;
use crate::view::components::toolbar::Toolbar;
use crate::view::theme;

pub struct View;

impl View {
    /// Draws the full UI for one frame; called from `terminal.draw`.
    pub fn redraw(frame: &mut Frame<'_>, app: &AppState) {
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(2), // toolbar
                Constraint::Min(5),    // table
                Constraint::Length(2), // destination bar
                Constraint::Length(2), // status bar
            ])
            .split(frame.area())
            .to_vec();

        Self::render_header(frame, app, chunks[0]);
        Toolbar::render(frame, app, chunks[1]);
        FileTable::render(frame, app, chunks[2]);
        DestinationBar::render(frame, app, chunks[3]);
        StatusBar::render(frame, app, chunks[4]);

        if app.transfer == TransferPhase::Confirming {
            let area = Self::overlay_area(frame.area(), 60, 40);
            frame.render_widget(Clear, area);
            ConfirmModal::render(frame, app, area);
        } else if app.overlay == Overlay::Help {
            let area = Self::overlay_area(frame.area(), 70, 80);
            frame.render_widget(Clear, area);
            HelpOverlay::render(frame, app, area);
        }
    }

    fn render_header(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let title = Line::from(vec![
            Span::styled(
                " 📥 HomeLab Movers ",
                Style::default()
                    .fg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "/mnt/downloads/jd_completed",
                Style::default().fg(theme::COMMENT),
            ),
            Span::styled(
                format!("   {} items pending", app.catalog.len()),
                Style::default().fg(theme::CYAN),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        // Single latest-log slot; overwritten per moved file.
        let log_line = match &app.latest_log {
            Some(message) => Line::from(vec![
                Span::styled(
                    format!(" {}: ", app.active_persona().name),
                    Style::default()
                        .fg(theme::GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.clone(), Style::default().fg(theme::COMMENT)),
            ]),
            None => Line::from(Span::styled(
                " —",
                Style::default().fg(theme::CURRENT_LINE),
            )),
        };
        frame.render_widget(Paragraph::new(log_line), rows[1]);
    }

    /// Centered overlay rectangle as a percentage of the full frame. Never
    /// larger than the frame itself, so tiny terminals stay panic-free.
    fn overlay_area(full: Rect, pct_w: u16, pct_h: u16) -> Rect {
        let w: u16 = ((u32::from(full.width) * u32::from(pct_w) / 100) as u16)
            .max(10)
            .min(full.width);
        let h: u16 = ((u32::from(full.height) * u32::from(pct_h) / 100) as u16)
            .max(5)
            .min(full.height);
        let x: u16 = full.x + (full.width - w) / 2;
        let y: u16 = full.y + (full.height - h) / 2;
        Rect::new(x, y, w, h)
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;

    use crate::config::config::Config;
    use crate::confirm::generator::{ConfirmRequest, ConfirmationGenerator};

    struct NullGenerator;

    #[async_trait]
    impl ConfirmationGenerator for NullGenerator {
        async fn generate(&self, _req: &ConfirmRequest) -> String {
            String::new()
        }
    }

    fn state() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        AppState::new(Arc::new(Config::default()), tx, Arc::new(NullGenerator))
    }

    #[test]
    fn overlay_area_fits_inside_small_frames() {
        for (w, h) in [(8u16, 4u16), (1, 1), (10, 5), (200, 60)] {
            let full = Rect::new(0, 0, w, h);
            let area = View::overlay_area(full, 60, 40);
            assert!(area.width <= full.width);
            assert!(area.height <= full.height);
            assert!(area.x + area.width <= full.width);
            assert!(area.y + area.height <= full.height);
        }
    }

    #[test]
    fn confirm_modal_renders_on_a_tiny_terminal() {
        let mut app = state();
        app.catalog.toggle("1");
        app.initiate_transfer();
        assert_eq!(app.transfer, TransferPhase::Confirming);

        let backend = TestBackend::new(8, 4);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| View::redraw(frame, &app))
            .expect("draw confirm modal");
    }

    #[test]
    fn help_overlay_renders_on_a_tiny_terminal() {
        let mut app = state();
        app.overlay = Overlay::Help;

        let backend = TestBackend::new(8, 4);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| View::redraw(frame, &app))
            .expect("draw help overlay");
    }
}
