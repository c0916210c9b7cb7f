//! Discard confirmation capability.

use async_trait::async_trait;

use super::decision::ConfirmChoice;

/// Asks the user whether unsaved edits may be discarded.
///
/// The guard suspends on this call; the rest of the UI keeps running.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm_discard(&self) -> ConfirmChoice;
}

/// Prompt that always answers with the same choice. Used for headless hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub ConfirmChoice);

#[async_trait]
impl ConfirmPrompt for FixedPrompt {
    async fn confirm_discard(&self) -> ConfirmChoice {
        self.0
    }
}
