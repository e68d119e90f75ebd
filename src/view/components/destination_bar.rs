//! src/view/components/destination_bar.rs
//! ============================================================================
//! # DestinationBar: Target Picker and Persona Line
//!
//! One line of destination chips (Tab cycles) with the active destination's
//! display path, and one line for the active persona.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct DestinationBar;

impl DestinationBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let mut spans: Vec<Span<'_>> = vec![Span::styled(
            " Move to: ",
            Style::default().fg(theme::COMMENT),
        )];
        for (idx, dest) in app.destinations.iter().enumerate() {
            let active = idx == app.dest_index;
            let style = if active {
                Style::default()
                    .fg(theme::ORANGE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::COMMENT)
            };
            spans.push(Span::styled(
                format!("{} {} ", dest.icon.glyph(), dest.name),
                style,
            ));
        }
        spans.push(Span::styled(
            format!("→ {}", app.active_destination().path),
            Style::default().fg(theme::CYAN),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

        let persona = app.active_persona();
        let persona_line = Line::from(vec![
            Span::styled(" Persona: ", Style::default().fg(theme::COMMENT)),
            Span::styled(
                format!("{} ({})", persona.name, persona.role),
                Style::default().fg(theme::PURPLE),
            ),
            Span::styled("  (p cycles)", Style::default().fg(theme::COMMENT)),
        ]);
        frame.render_widget(Paragraph::new(persona_line), rows[1]);
    }
}
