//! src/view/components/help_overlay.rs
//! ============================================================================
//! # HelpOverlay: Key Bindings and Persona Roster

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "HomeLab Movers — Help",
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Table:"),
            Line::from("  Up/Down or k/j   Move cursor"),
            Line::from("  Space            Select/deselect row"),
            Line::from("  a                Select/deselect all visible"),
            Line::from("  n t s d          Sort by name/type/size/date"),
            Line::from(""),
            Line::from("Filtering:"),
            Line::from("  /                Search (Esc/Enter to leave)"),
            Line::from("  f                Cycle type filter"),
            Line::from("  c                Clear search + filter"),
            Line::from(""),
            Line::from("Moving:"),
            Line::from("  Tab              Cycle destination"),
            Line::from("  p                Cycle persona"),
            Line::from("  Enter or m       Move selected files"),
            Line::from("  Esc              Cancel a running move (between files)"),
            Line::from(""),
            Line::from("  ? or F1          Toggle this help"),
            Line::from("  q                Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Personas",
                Style::default()
                    .fg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for persona in &app.personas {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ({}): ", persona.name, persona.role),
                    Style::default().fg(theme::CYAN),
                ),
                Span::styled(
                    persona.description.clone(),
                    Style::default().fg(theme::COMMENT),
                ),
            ]));
        }

        let para = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::PURPLE))
                .style(Style::default().bg(theme::BACKGROUND))
                .title(" Help "),
        );
        frame.render_widget(para, area);
    }
}
