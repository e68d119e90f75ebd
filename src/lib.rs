//! lib.rs — Main Library Entry for the Download Triage TUI
//! -----------------------------------------------
//! Exposes catalog, model, confirm, controller, task, and view modules.
//! Only re-export what should be public at the crate root.

/// --- Error handling (unified error type for app) ---
pub mod error;

/// --- Configuration: timings, seed catalog, destinations, personas ---
pub mod config {
    pub mod config;
}

/// --- Catalog: pending entries, selection set, size codec ---
pub mod catalog {
    pub mod entry;
    pub mod size;
    pub mod store;
}

/// --- State/data models (MVC model) ---
pub mod model {
    pub mod app_state;
    pub mod destination;
    pub mod transfer;
    pub mod view_state;
}

/// --- Confirmation messages: personas and the generator seam ---
pub mod confirm {
    pub mod generator;
    pub mod persona;
}

/// --- Controller/event loop (main async event handling) ---
pub mod controller {
    pub mod actions;
    pub mod event_loop;
}

/// --- Background/async tasks ---
pub mod tasks {
    pub mod transfer_task;
}

/// --- UI rendering: all view logic and components ---
pub mod view {
    pub mod theme;
    pub mod ui;
    pub mod components {
        pub mod confirm_modal;
        pub mod destination_bar;
        pub mod file_table;
        pub mod help_overlay;
        pub mod status_bar;
        pub mod toolbar;
    }
}

pub mod logging;
pub use logging::Logger;

/// --- Crate-level re-exports for the most important types ---
pub use error::AppError;
pub use model::app_state::AppState;
