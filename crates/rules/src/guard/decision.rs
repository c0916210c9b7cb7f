//! Request/response types of the selection protocol.

use ruledesk_core::Ruleset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one pending selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionTicket(pub u64);

impl fmt::Display for SelectionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immediate answer to a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDecision {
    /// The selection was applied.
    Allow,
    /// The selection did not happen (yet).
    Deny(DenyReason),
}

impl SelectionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SelectionDecision::Allow)
    }
}

/// Why a selection request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The viewer has unsaved edits; ask the user, then resolve `ticket`.
    UnsavedChanges { ticket: SelectionTicket },
    /// Another request is already waiting on the user; this one is dropped.
    ConfirmationPending { ticket: SelectionTicket },
}

/// The user's answer to the discard prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmChoice {
    /// Throw away the unsaved edits and continue.
    Discard,
    /// Keep editing.
    Keep,
    /// Prompt closed without a choice. Treated like `Keep`.
    Dismissed,
}

/// Final result of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Selection and viewer now reflect the requested nodes.
    Applied,
    /// The already-selected ruleset was reloaded, dropping edits.
    Reloaded,
    /// The user kept their edits; nothing changed.
    Cancelled,
    /// Stale ticket or a concurrent request; nothing changed.
    Ignored,
}

/// Report from the host's save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub success: bool,
    /// Whether the ruleset was created by this save.
    pub is_new: bool,
    /// The ruleset as persisted (carries the new id on create).
    pub ruleset: Ruleset,
}
