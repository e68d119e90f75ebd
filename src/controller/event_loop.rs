//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Event Merge and Dispatch
//!
//! Merges terminal input with the action channel (transfer task results) and
//! applies every mutation on the shared session state. This is the single
//! mutator: the transfer task only ever sends actions here.

use std::sync::Arc;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

use crate::controller::actions::Action;
use crate::model::app_state::{AppState, Overlay, UiMode};
use crate::model::transfer::TransferPhase;
use crate::model::view_state::SortKey;

pub struct Controller {
    pub app: Arc<Mutex<AppState>>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Controller {
    pub fn new(app: Arc<Mutex<AppState>>, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { app, action_rx }
    }

    /// Next thing to do: a queued action if one is pending, otherwise the
    /// next terminal event. Returns `None` when the action channel closes.
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            tokio::select! {
                maybe_action = self.action_rx.recv() => return maybe_action,
                maybe_event = Self::next_terminal_event() => {
                    if let Some(action) = maybe_event.and_then(map_terminal_event) {
                        return Some(action);
                    }
                    // poll timeout; keep waiting
                }
            }
        }
    }

    /// Waits for the next terminal event via crossterm's non-blocking poll,
    /// bridged into Tokio with spawn_blocking.
    async fn next_terminal_event() -> Option<TermEvent> {
        tokio::task::spawn_blocking(|| {
            if event::poll(std::time::Duration::from_millis(100)).unwrap_or(false) {
                event::read().ok()
            } else {
                None
            }
        })
        .await
        .ok()
        .flatten()
    }

    /// Apply one action to the session state. Key events are first resolved
    /// against the current mode/overlay/phase, then applied like any other
    /// command.
    pub async fn dispatch_action(&self, action: Action) {
        let mut app = self.app.lock().await;

        let action = match action {
            Action::Key(key) => match action_for_key(&app, key) {
                Some(resolved) => resolved,
                None => return,
            },
            other => other,
        };
        debug!("dispatch {:?}", action);

        match action {
            Action::Key(_) => {}
            Action::Quit => {} // intercepted by the main loop
            Action::Resize(..) => app.redraw = true,
            Action::ToggleHelp => {
                app.overlay = match app.overlay {
                    Overlay::Help => Overlay::None,
                    Overlay::None => Overlay::Help,
                };
                app.redraw = true;
            }

            Action::EnterSearch => {
                app.mode = UiMode::Search;
                app.redraw = true;
            }
            Action::LeaveSearch => {
                app.mode = UiMode::Browse;
                app.clamp_cursor();
                app.redraw = true;
            }
            Action::SearchInput(c) => {
                app.view.query.push(c);
                app.clamp_cursor();
                app.redraw = true;
            }
            Action::SearchBackspace => {
                app.view.query.pop();
                app.clamp_cursor();
                app.redraw = true;
            }
            Action::CycleFilter => {
                app.view.filter = app.view.filter.next();
                app.clamp_cursor();
                app.redraw = true;
            }
            Action::ClearFilters => {
                app.view.clear_filters();
                app.clamp_cursor();
                app.redraw = true;
            }
            Action::SortBy(key) => {
                app.view.set_sort(key);
                app.redraw = true;
            }

            Action::MoveCursorUp => app.move_cursor_up(),
            Action::MoveCursorDown => app.move_cursor_down(),
            Action::ToggleSelected => app.toggle_at_cursor(),
            Action::ToggleSelectAll => app.toggle_select_all_visible(),

            Action::CycleDestination => app.cycle_destination(),
            Action::CyclePersona => app.cycle_persona(),

            Action::InitiateTransfer => app.initiate_transfer(),
            Action::CancelTransfer => app.cancel_transfer(),
            Action::ConfirmTransfer => app.confirm_transfer(),
            Action::RequestCancel => app.request_cancel(),

            Action::RemoveEntry { id } => app.apply_remove(&id),
            Action::TransferLog { message } => app.apply_log(message),
            Action::TransferFailed { error } => app.apply_failed(error),
            Action::TransferAborted => app.apply_aborted(),
            Action::TransferComplete => app.apply_complete(),
        }
    }
}

fn map_terminal_event(event: TermEvent) -> Option<Action> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Key(key)),
        TermEvent::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

/// Resolve a key press against the current UI context. Returns `None` for
/// keys that mean nothing right now; the transfer button equivalent (Enter)
/// resolves to `None` rather than `InitiateTransfer` when nothing is
/// selected, which is the "disabled at the boundary" rule.
fn action_for_key(app: &AppState, key: KeyEvent) -> Option<Action> {
    // Help overlay swallows everything except its close keys.
    if app.overlay == Overlay::Help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Char('q') => {
                Some(Action::ToggleHelp)
            }
            _ => None,
        };
    }

    // Confirmation modal: yes/no only.
    if app.transfer == TransferPhase::Confirming {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(Action::ConfirmTransfer),
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::CancelTransfer),
            _ => None,
        };
    }

    // Live query editing.
    if app.mode == UiMode::Search {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::LeaveSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('n') => Some(Action::SortBy(SortKey::Name)),
        KeyCode::Char('t') => Some(Action::SortBy(SortKey::Type)),
        KeyCode::Char('s') => Some(Action::SortBy(SortKey::Size)),
        KeyCode::Char('d') => Some(Action::SortBy(SortKey::Date)),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursorDown),
        KeyCode::Char(' ') => Some(Action::ToggleSelected),
        KeyCode::Char('a') => Some(Action::ToggleSelectAll),

        KeyCode::Tab => Some(Action::CycleDestination),
        KeyCode::Char('p') => Some(Action::CyclePersona),

        KeyCode::Enter | KeyCode::Char('m')
            if app.transfer.is_idle() && app.catalog.has_selection() =>
        {
            Some(Action::InitiateTransfer)
        }
        KeyCode::Esc if app.transfer.is_processing() => Some(Action::RequestCancel),
        _ => None,
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //
