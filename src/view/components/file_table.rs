//! src/view/components/file_table.rs
//! ============================================================================
//! # FileTable: The Triage Board
//!
//! Renders the derived view as a selectable table: checkbox column, name,
//! type, size, and date, with a sort indicator on the active column and a
//! select-all checkbox in the header (`[-]` when the selection is partial).
//!
//! Two distinct empty states: an empty catalog means the inbox is done
//! ("all clear"), while a non-empty catalog with no matches points at the
//! active filters.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::model::app_state::AppState;
use crate::model::view_state::{SortDirection, SortKey};
use crate::view::theme;

pub struct FileTable;

impl FileTable {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let view = app.visible();

        if app.catalog.is_empty() {
            Self::render_empty(
                frame,
                area,
                "✨ All clear",
                "Nothing left to triage. Go touch grass.",
            );
            return;
        }
        if view.is_empty() {
            Self::render_empty(
                frame,
                area,
                "No matches",
                "No files match the current search/filter. Press c to clear filters.",
            );
            return;
        }

        let (all_selected, indeterminate) = app.selection_summary();
        let select_all = if all_selected {
            "[x]"
        } else if indeterminate {
            "[-]"
        } else {
            "[ ]"
        };

        let header = Row::new(vec![
            Cell::from(select_all),
            Cell::from(column_label("Name", SortKey::Name, app)),
            Cell::from(column_label("Type", SortKey::Type, app)),
            Cell::from(column_label("Size", SortKey::Size, app)),
            Cell::from(column_label("Date", SortKey::Date, app)),
        ])
        .style(
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        );

        let rows = view.iter().map(|entry| {
            let checkbox = if app.catalog.is_selected(&entry.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if app.catalog.is_selected(&entry.id) {
                Style::default().fg(theme::GREEN)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(entry.name.clone()).style(style),
                Cell::from(entry.category.as_str()),
                Cell::from(entry.size_text.clone()),
                Cell::from(entry.date_text.clone()),
            ])
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(50),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(10),
        ];

        let mut table_state = TableState::default();
        table_state.select(Some(app.cursor.min(view.len().saturating_sub(1))));

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::CURRENT_LINE))
                    .title(format!(" {} pending ", view.len())),
            )
            .row_highlight_style(
                Style::default()
                    .bg(theme::CURRENT_LINE)
                    .add_modifier(Modifier::BOLD),
            )
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_empty(frame: &mut Frame<'_>, area: Rect, title: &str, hint: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                title.to_owned(),
                Style::default()
                    .fg(theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                hint.to_owned(),
                Style::default().fg(theme::COMMENT),
            )),
        ];
        let para = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::CURRENT_LINE)),
        );
        frame.render_widget(para, area);
    }
}

/// Column header with an arrow on the active sort key.
fn column_label(label: &str, key: SortKey, app: &AppState) -> String {
    if app.view.sort_key == key {
        let arrow = match app.view.sort_dir {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        format!("{label} {arrow}")
    } else {
        label.to_owned()
    }
}
