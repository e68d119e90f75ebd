//! src/view/components/toolbar.rs
//! ============================================================================
//! # Toolbar: Search Box and Filter Chips

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::catalog::entry::FileCategory;
use crate::model::app_state::{AppState, UiMode};
use crate::model::view_state::TypeFilter;
use crate::view::theme;

pub struct Toolbar;

impl Toolbar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        // Search line; a block cursor marks live editing.
        let (search_style, caret) = if app.mode == UiMode::Search {
            (Style::default().fg(theme::CYAN), "█")
        } else {
            (Style::default().fg(theme::COMMENT), "")
        };
        let search = Paragraph::new(Line::from(vec![
            Span::styled(" 🔍 ", search_style),
            Span::styled(
                if app.view.query.is_empty() && app.mode != UiMode::Search {
                    "Search files… (/)".to_owned()
                } else {
                    app.view.query.clone()
                },
                search_style,
            ),
            Span::styled(caret, search_style),
        ]));
        frame.render_widget(search, rows[0]);

        // Filter chips: "all" plus every category, active one highlighted.
        let mut spans: Vec<Span<'_>> = vec![Span::raw(" ")];
        spans.push(chip("all", app.view.filter == TypeFilter::All));
        for category in FileCategory::ALL {
            spans.push(Span::raw(" "));
            spans.push(chip(
                category.as_str(),
                app.view.filter == TypeFilter::Category(category),
            ));
        }
        spans.push(Span::styled(
            "  (f cycles, c clears)",
            Style::default().fg(theme::COMMENT),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
    }
}

fn chip(label: &str, active: bool) -> Span<'_> {
    if active {
        Span::styled(
            format!("[{label}]"),
            Style::default()
                .fg(theme::PURPLE)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(theme::COMMENT))
    }
}
