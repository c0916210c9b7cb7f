//! Selection/edit guard for the rules editor.
//!
//! Tracks the selected rulesets and keeps unsaved viewer edits from being
//! discarded silently. Navigation requests return an explicit
//! [`SelectionDecision`]; a request denied because of unsaved changes leaves a
//! pending ticket that the host resolves after asking the user, either by hand
//! ([`EditGuard::resolve_pending`]) or through a [`ConfirmPrompt`].
//!
//! Only one confirmation can be outstanding. Requests arriving while it is
//! open are denied with [`DenyReason::ConfirmationPending`].

mod core;
mod decision;
mod handlers;
mod prompt;
mod viewer;


pub use self::core::EditGuard;
pub use self::decision::{
    ConfirmChoice, DenyReason, SaveResult, SelectionDecision, SelectionOutcome, SelectionTicket,
};
pub use self::handlers::{HostHandler, HostHandlers, RulesetAction};
pub use self::prompt::{ConfirmPrompt, FixedPrompt};
pub use self::viewer::{RuleViewer, RulesetList, ViewerState};
