//! src/confirm/generator.rs
//! ============================================================================
//! # ConfirmationGenerator: Per-Entry Move Commentary
//!
//! After each simulated move the workflow asks the generator for one line of
//! persona-flavoured commentary. The production implementation sleeps for a
//! configurable delay (the "thinking" feel of the original board), then picks
//! uniformly at random from the persona's template set and substitutes the
//! `{file}` and `{dest}` placeholders.
//!
//! The trait seam exists so tests can swap in a deterministic double; the
//! workflow only sees `Arc<dyn ConfirmationGenerator>`.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

/// One request per moved entry. `destination_path` is accepted but unused by
/// the current template set; it stays in the contract for templates that may
/// want it later.
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    pub file_name: String,
    pub destination_name: String,
    pub destination_path: String,
    pub persona_id: String,
}

#[async_trait]
pub trait ConfirmationGenerator: Send + Sync {
    /// Produce one confirmation line. Always succeeds; the workflow bounds
    /// the call with a timeout instead of relying on an error channel here.
    async fn generate(&self, req: &ConfirmRequest) -> String;
}

const SYSADMIN: [&str; 4] = [
    "mv '{file}' '{dest}' # Executed successfully.",
    "File transfer complete. Don't make a habit of this.",
    "'{file}' moved to {dest}. Logs updated.",
    "Operation successful. I hope you put it in the right place.",
];

const BUTLER: [&str; 4] = [
    "I have carefully placed '{file}' into {dest} for you.",
    "Your file '{file}' has been safely transported to {dest}.",
    "As you requested, '{file}' is now residing in {dest}.",
    "Transfer complete. Is there anything else you require for '{file}'?",
];

const GAMER: [&str; 4] = [
    "Pog! '{file}' just warped to {dest}.",
    "EZ! '{file}' moved to {dest}. No lag.",
    "Loot secured: '{file}' dropped in {dest}.",
    "Mission passed! '{file}' is now in {dest}.",
];

/// Fallback for persona ids without a dedicated template set.
const GENERIC: [&str; 1] = ["Moved '{file}' to {dest}."];

fn templates_for(persona_id: &str) -> &'static [&'static str] {
    match persona_id {
        "sysadmin" => &SYSADMIN,
        "butler" => &BUTLER,
        "gamer" => &GAMER,
        _ => &GENERIC,
    }
}

/// Substitute `{file}` and `{dest}` in a template.
fn render(template: &str, req: &ConfirmRequest) -> String {
    template
        .replace("{file}", &req.file_name)
        .replace("{dest}", &req.destination_name)
}

/// Production generator: simulated latency + random template choice.
pub struct TemplateGenerator {
    delay: Duration,
}

impl TemplateGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ConfirmationGenerator for TemplateGenerator {
    async fn generate(&self, req: &ConfirmRequest) -> String {
        tokio::time::sleep(self.delay).await;

        let pool = templates_for(&req.persona_id);
        let template = pool
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(GENERIC[0]);
        render(template, req)
    }
}

/// Check whether `message` is a rendered instance of one of `persona_id`'s
/// templates. Used by the UI-less tests; cheap enough to keep out of cfg(test)
/// so integration tests can reach it too.
pub fn matches_template(persona_id: &str, message: &str, req: &ConfirmRequest) -> bool {
    templates_for(persona_id)
        .iter()
        .any(|t| render(t, req) == message)
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //
