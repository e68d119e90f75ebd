//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Session State for the Triage Board
//!
//! Unifies everything the controller mutates: the catalog and its selection
//! set, view configuration, destination/persona pointers, the transfer state
//! machine, and the single latest-log slot. There is exactly one mutator (the
//! controller task), so no internal locking; the transfer task reports back
//! over the action channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::catalog::entry::FileEntry;
use crate::catalog::store::Catalog;
use crate::config::config::Config;
use crate::confirm::generator::ConfirmationGenerator;
use crate::confirm::persona::Persona;
use crate::controller::actions::Action;
use crate::model::destination::Destination;
use crate::model::transfer::TransferPhase;
use crate::model::view_state::{self, ViewState};
use crate::tasks::transfer_task::{TransferItem, TransferTask};

/// Keyboard focus: table navigation vs. live query editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Browse,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
}

pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
    pub view: ViewState,
    pub destinations: Vec<Destination>,
    pub dest_index: usize,
    pub personas: Vec<Persona>,
    pub persona_index: usize,
    pub transfer: TransferPhase,
    /// Most recent confirmation message; overwritten per entry, never
    /// appended.
    pub latest_log: Option<String>,
    pub mode: UiMode,
    pub overlay: Overlay,
    /// Cursor row within the visible list.
    pub cursor: usize,
    pub redraw: bool,
    pub last_error: Option<String>,
    pub last_status: Option<String>,
    pub action_tx: mpsc::UnboundedSender<Action>,
    generator: Arc<dyn ConfirmationGenerator>,
    cancel: Option<CancellationToken>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        action_tx: mpsc::UnboundedSender<Action>,
        generator: Arc<dyn ConfirmationGenerator>,
    ) -> Self {
        let catalog = Catalog::from_entries(config.catalog.clone());
        let destinations = config.destinations.clone();
        let personas = config.personas.clone();
        Self {
            config,
            catalog,
            view: ViewState::new(),
            destinations,
            dest_index: 0,
            personas,
            persona_index: 0,
            transfer: TransferPhase::Idle,
            latest_log: None,
            mode: UiMode::Browse,
            overlay: Overlay::None,
            cursor: 0,
            redraw: true,
            last_error: None,
            last_status: None,
            action_tx,
            generator,
            cancel: None,
        }
    }

    // --- derived view ---------------------------------------------------- //

    /// The filtered, sorted list currently presented to the user.
    pub fn visible(&self) -> Vec<&FileEntry> {
        view_state::visible(&self.catalog, &self.view)
    }

    pub fn active_destination(&self) -> &Destination {
        &self.destinations[self.dest_index]
    }

    pub fn active_persona(&self) -> &Persona {
        &self.personas[self.persona_index]
    }

    /// Header checkbox state over the current view.
    pub fn selection_summary(&self) -> (bool, bool) {
        let view = self.visible();
        let ids = view.iter().map(|e| e.id.as_str());
        let all = self.catalog.all_selected(ids.clone());
        let indeterminate = self.catalog.indeterminate(ids);
        (all, indeterminate)
    }

    // --- status plumbing ------------------------------------------------- //

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        error!("{}", msg);
        self.last_error = Some(msg);
        self.redraw = true;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        info!("{}", msg);
        self.last_status = Some(msg);
        self.redraw = true;
    }

    pub fn clear_msgs(&mut self) {
        self.last_error = None;
        self.last_status = None;
        self.redraw = true;
    }

    // --- cursor & selection ---------------------------------------------- //

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.redraw = true;
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
        self.redraw = true;
    }

    /// Toggle selection of the row under the cursor.
    pub fn toggle_at_cursor(&mut self) {
        let id = self.visible().get(self.cursor).map(|e| e.id.clone());
        if let Some(id) = id {
            self.catalog.toggle(&id);
            self.redraw = true;
        }
    }

    /// Select-all toggle over the currently visible view.
    pub fn toggle_select_all_visible(&mut self) {
        let ids: Vec<String> = self.visible().iter().map(|e| e.id.clone()).collect();
        self.catalog.toggle_select_all(ids.iter().map(String::as_str));
        self.redraw = true;
    }

    pub fn cycle_destination(&mut self) {
        self.dest_index = (self.dest_index + 1) % self.destinations.len();
        self.redraw = true;
    }

    pub fn cycle_persona(&mut self) {
        self.persona_index = (self.persona_index + 1) % self.personas.len();
        self.redraw = true;
    }

    // --- transfer workflow ----------------------------------------------- //

    /// Idle -> Confirming. The key binding is also suppressed at the view
    /// boundary when nothing is selected; this guard is the backstop.
    pub fn initiate_transfer(&mut self) {
        let next = self.transfer.initiate(self.catalog.has_selection());
        if next != self.transfer {
            self.transfer = next;
            self.clear_msgs();
        }
    }

    /// Confirming -> Idle, nothing else changes.
    pub fn cancel_transfer(&mut self) {
        self.transfer = self.transfer.cancel();
        self.redraw = true;
    }

    /// Confirming -> Processing: snapshot the selected entries in catalog
    /// order and hand them to the sequential transfer task.
    pub fn confirm_transfer(&mut self) {
        if self.transfer != TransferPhase::Confirming {
            return;
        }
        self.transfer = self.transfer.confirm();

        let items: Vec<TransferItem> = self
            .catalog
            .selected_in_order()
            .into_iter()
            .filter_map(|id| {
                self.catalog.get(&id).map(|e| TransferItem {
                    id,
                    file_name: e.name.clone(),
                })
            })
            .collect();

        info!(
            "starting transfer of {} entries to {:?}",
            items.len(),
            self.active_destination().id
        );

        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());

        TransferTask::new(
            items,
            self.active_destination().clone(),
            self.active_persona().id.clone(),
            Arc::clone(&self.generator),
            self.config.confirm_timeout,
            self.action_tx.clone(),
            cancel,
        )
        .spawn();
        self.redraw = true;
    }

    /// Ask a running transfer to stop; honored between entries.
    pub fn request_cancel(&mut self) {
        if let Some(token) = &self.cancel {
            if self.transfer.is_processing() {
                token.cancel();
                self.set_status("Cancelling after the current file…");
            }
        }
    }

    // --- transfer task results ------------------------------------------- //

    pub fn apply_remove(&mut self, id: &str) {
        if self.catalog.remove(id).is_none() {
            warn!("transfer removed unknown id {id:?}");
        }
        self.clamp_cursor();
        self.redraw = true;
    }

    pub fn apply_log(&mut self, message: String) {
        info!("{}: {}", self.active_persona().name, message);
        self.latest_log = Some(message);
        self.redraw = true;
    }

    pub fn apply_failed(&mut self, error: String) {
        self.transfer = self.transfer.finish();
        self.cancel = None;
        self.set_error(error);
    }

    pub fn apply_aborted(&mut self) {
        self.transfer = self.transfer.finish();
        self.cancel = None;
        self.set_status("Transfer cancelled.");
    }

    pub fn apply_complete(&mut self) {
        self.catalog.clear_selection();
        self.transfer = self.transfer.finish();
        self.cancel = None;
        self.set_status("All files moved.");
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog_len", &self.catalog.len())
            .field("selected", &self.catalog.selected_count())
            .field("view", &self.view)
            .field("transfer", &self.transfer)
            .field("dest_index", &self.dest_index)
            .field("persona_index", &self.persona_index)
            .field("latest_log", &self.latest_log)
            .finish()
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::catalog::entry::FileCategory;
    use crate::confirm::generator::{ConfirmRequest, TemplateGenerator, matches_template};
    use crate::model::view_state::TypeFilter;

    /// Deterministic stand-in for the random template generator.
    struct FixedGenerator;

    #[async_trait]
    impl ConfirmationGenerator for FixedGenerator {
        async fn generate(&self, req: &ConfirmRequest) -> String {
            format!("moved {} -> {}", req.file_name, req.destination_name)
        }
    }

    fn entry(id: &str, name: &str, category: FileCategory, size: &str, date: &str) -> FileEntry {
        FileEntry {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            size_text: size.to_owned(),
            date_text: date.to_owned(),
        }
    }

    fn two_entry_config() -> Config {
        Config {
            catalog: vec![
                entry("1", "a.mkv", FileCategory::Video, "2 GB", "2023-01-01"),
                entry("2", "b.mp3", FileCategory::Audio, "500 MB", "2023-01-02"),
            ],
            ..Config::default()
        }
    }

    fn state_with(
        config: Config,
        generator: Arc<dyn ConfirmationGenerator>,
    ) -> (AppState, UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(Arc::new(config), tx, generator), rx)
    }

    /// Pump task results back into the state until the run ends, the way the
    /// controller's dispatch loop does.
    async fn drain_transfer(state: &mut AppState, rx: &mut UnboundedReceiver<Action>) {
        while let Some(action) = rx.recv().await {
            match action {
                Action::RemoveEntry { id } => state.apply_remove(&id),
                Action::TransferLog { message } => state.apply_log(message),
                Action::TransferFailed { error } => {
                    state.apply_failed(error);
                    break;
                }
                Action::TransferAborted => {
                    state.apply_aborted();
                    break;
                }
                Action::TransferComplete => {
                    state.apply_complete();
                    break;
                }
                other => panic!("unexpected action {other:?}"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn end_to_end_filtered_transfer() {
        let (mut state, mut rx) =
            state_with(two_entry_config(), Arc::new(FixedGenerator));

        state.view.filter = TypeFilter::Category(FileCategory::Video);
        let view = state.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");

        state.catalog.toggle("1");
        state.initiate_transfer();
        assert_eq!(state.transfer, TransferPhase::Confirming);

        state.confirm_transfer();
        assert_eq!(state.transfer, TransferPhase::Processing);

        drain_transfer(&mut state, &mut rx).await;

        assert_eq!(state.transfer, TransferPhase::Idle);
        assert_eq!(state.catalog.len(), 1);
        assert!(state.catalog.get("2").is_some());
        assert!(!state.catalog.has_selection());
        assert_eq!(
            state.latest_log.as_deref(),
            Some("moved a.mkv -> Jellyfin Movies")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn end_to_end_with_real_templates() {
        let mut config = two_entry_config();
        config.confirm_delay = std::time::Duration::from_millis(600);
        let delay = config.confirm_delay;
        let (mut state, mut rx) =
            state_with(config, Arc::new(TemplateGenerator::new(delay)));

        state.catalog.toggle("1");
        state.initiate_transfer();
        state.confirm_transfer();
        drain_transfer(&mut state, &mut rx).await;

        let message = state.latest_log.clone().expect("one message logged");
        let req = ConfirmRequest {
            file_name: "a.mkv".to_owned(),
            destination_name: state.active_destination().name.clone(),
            destination_path: state.active_destination().path.clone(),
            persona_id: state.active_persona().id.clone(),
        };
        assert!(
            matches_template(&req.persona_id, &message, &req),
            "unexpected message {message:?}"
        );
    }

    #[tokio::test]
    async fn initiate_without_selection_is_a_no_op() {
        let (mut state, _rx) = state_with(two_entry_config(), Arc::new(FixedGenerator));
        state.initiate_transfer();
        assert_eq!(state.transfer, TransferPhase::Idle);
    }

    #[tokio::test]
    async fn cancel_from_confirming_has_no_side_effects() {
        let (mut state, _rx) = state_with(two_entry_config(), Arc::new(FixedGenerator));
        state.catalog.toggle("2");
        state.initiate_transfer();
        state.cancel_transfer();

        assert_eq!(state.transfer, TransferPhase::Idle);
        assert_eq!(state.catalog.len(), 2);
        assert!(state.catalog.is_selected("2"));
        assert!(state.latest_log.is_none());
    }

    #[tokio::test]
    async fn cursor_clamps_when_entries_disappear() {
        let (mut state, _rx) = state_with(two_entry_config(), Arc::new(FixedGenerator));
        state.cursor = 1;
        state.apply_remove("2");
        assert_eq!(state.cursor, 0);
        state.apply_remove("1");
        assert_eq!(state.cursor, 0);
    }

    #[tokio::test]
    async fn persona_and_destination_cycling_wrap() {
        let (mut state, _rx) = state_with(two_entry_config(), Arc::new(FixedGenerator));
        let personas = state.personas.len();
        for _ in 0..personas {
            state.cycle_persona();
        }
        assert_eq!(state.persona_index, 0);

        let dests = state.destinations.len();
        for _ in 0..dests {
            state.cycle_destination();
        }
        assert_eq!(state.dest_index, 0);
    }
}
