//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! The `Action` enum is the single interface the controller processes: raw
//! terminal events, user commands, and results streamed back from the
//! transfer task. The task never touches state directly; everything it does
//! arrives here and is applied by the one mutator.

use crossterm::event::KeyEvent;

use crate::model::view_state::SortKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A keyboard event, interpreted according to the current UI mode.
    Key(KeyEvent),
    /// A terminal resize event.
    Resize(u16, u16),
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // --- view pipeline ---
    /// Enter search mode (the query edits in place).
    EnterSearch,
    /// Leave search mode, keeping the query.
    LeaveSearch,
    /// Append one character to the search query.
    SearchInput(char),
    /// Delete the last character of the search query.
    SearchBackspace,
    /// Cycle the type filter chip.
    CycleFilter,
    /// Reset search query and type filter.
    ClearFilters,
    /// Sort by column; repeated selection flips direction.
    SortBy(SortKey),

    // --- selection ---
    MoveCursorUp,
    MoveCursorDown,
    /// Toggle selection of the row under the cursor.
    ToggleSelected,
    /// Select/deselect everything currently visible.
    ToggleSelectAll,

    // --- destination / persona ---
    CycleDestination,
    CyclePersona,

    // --- transfer workflow ---
    /// Idle -> Confirming (no-op without a selection).
    InitiateTransfer,
    /// Confirming -> Idle.
    CancelTransfer,
    /// Confirming -> Processing; spawns the transfer task.
    ConfirmTransfer,
    /// Ask a running transfer to stop between entries.
    RequestCancel,

    // --- transfer task results ---
    /// One entry has been "moved": drop it from the catalog.
    RemoveEntry { id: String },
    /// Latest confirmation message (single slot, overwrites).
    TransferLog { message: String },
    /// The run aborted; remaining entries stay put.
    TransferFailed { error: String },
    /// The run was cancelled between entries.
    TransferAborted,
    /// All selected entries processed.
    TransferComplete,
}
