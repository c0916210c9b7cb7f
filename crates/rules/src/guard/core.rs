//! [`EditGuard`]: selection state plus unsaved-edit protection.

use ruledesk_core::{Ruleset, RulesetId, RulesetNode};
use tracing::{debug, info};

use super::decision::{
    ConfirmChoice, DenyReason, SaveResult, SelectionDecision, SelectionOutcome, SelectionTicket,
};
use super::handlers::{HostHandlers, RulesetAction};
use super::prompt::ConfirmPrompt;
use super::viewer::{RuleViewer, RulesetList};

/// A selection request waiting for the user's answer.
#[derive(Debug, Clone)]
struct PendingSelection {
    ticket: SelectionTicket,
    old_nodes: Vec<RulesetNode>,
    new_nodes: Vec<RulesetNode>,
}

/// Owns the selection state of the rules editor and mediates navigation.
///
/// All mutation goes through `&mut self`, so the host's event loop is the
/// only writer. The viewer's `modified` flag decides whether a navigation
/// needs confirmation.
pub struct EditGuard<V, L> {
    viewer: V,
    list: L,
    handlers: HostHandlers,
    selected_ids: Vec<RulesetId>,
    pending: Option<PendingSelection>,
    next_ticket: u64,
}

impl<V: RuleViewer, L: RulesetList> EditGuard<V, L> {
    pub fn new(viewer: V, list: L) -> Self {
        Self {
            viewer,
            list,
            handlers: HostHandlers::default(),
            selected_ids: Vec::new(),
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn with_handlers(mut self, handlers: HostHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn selected_ids(&self) -> &[RulesetId] {
        &self.selected_ids
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Ticket of the request awaiting confirmation, if any.
    pub fn pending_ticket(&self) -> Option<SelectionTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Ask to move the selection from `old_nodes` to `new_nodes`.
    ///
    /// Unmodified viewer: the selection is applied now. Modified viewer: the
    /// request is parked under a ticket and denied until resolved.
    pub fn request_selection(
        &mut self,
        old_nodes: &[RulesetNode],
        new_nodes: &[RulesetNode],
    ) -> SelectionDecision {
        if let Some(pending) = &self.pending {
            debug!(ticket = %pending.ticket, "selection request ignored, confirmation pending");
            return SelectionDecision::Deny(DenyReason::ConfirmationPending {
                ticket: pending.ticket,
            });
        }

        if !self.viewer.is_modified() {
            self.on_selection_changed(new_nodes);
            return SelectionDecision::Allow;
        }

        let ticket = SelectionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(PendingSelection {
            ticket,
            old_nodes: old_nodes.to_vec(),
            new_nodes: new_nodes.to_vec(),
        });
        info!(ticket = %ticket, "viewer has unsaved changes, selection needs confirmation");
        SelectionDecision::Deny(DenyReason::UnsavedChanges { ticket })
    }

    /// Resolve the pending request identified by `ticket`.
    ///
    /// A ticket that is not the current pending one is ignored.
    pub fn resolve_pending(
        &mut self,
        ticket: SelectionTicket,
        choice: ConfirmChoice,
    ) -> SelectionOutcome {
        let pending = match self.pending.take() {
            Some(p) if p.ticket == ticket => p,
            other => {
                self.pending = other;
                debug!(ticket = %ticket, "stale selection ticket");
                return SelectionOutcome::Ignored;
            }
        };

        match choice {
            ConfirmChoice::Discard => self.discard_and_select(pending),
            ConfirmChoice::Keep | ConfirmChoice::Dismissed => {
                info!(ticket = %ticket, choice = ?choice, "selection cancelled, keeping edits");
                SelectionOutcome::Cancelled
            }
        }
    }

    pub fn confirm_pending(&mut self, ticket: SelectionTicket) -> SelectionOutcome {
        self.resolve_pending(ticket, ConfirmChoice::Discard)
    }

    pub fn cancel_pending(&mut self, ticket: SelectionTicket) -> SelectionOutcome {
        self.resolve_pending(ticket, ConfirmChoice::Keep)
    }

    pub fn dismiss_pending(&mut self, ticket: SelectionTicket) -> SelectionOutcome {
        self.resolve_pending(ticket, ConfirmChoice::Dismissed)
    }

    /// Request a selection and, if needed, settle it through `prompt`.
    pub async fn request_selection_with<P: ConfirmPrompt + ?Sized>(
        &mut self,
        old_nodes: &[RulesetNode],
        new_nodes: &[RulesetNode],
        prompt: &P,
    ) -> SelectionOutcome {
        match self.request_selection(old_nodes, new_nodes) {
            SelectionDecision::Allow => SelectionOutcome::Applied,
            SelectionDecision::Deny(DenyReason::ConfirmationPending { .. }) => {
                SelectionOutcome::Ignored
            }
            SelectionDecision::Deny(DenyReason::UnsavedChanges { ticket }) => {
                let choice = prompt.confirm_discard().await;
                self.resolve_pending(ticket, choice)
            }
        }
    }

    fn discard_and_select(&mut self, pending: PendingSelection) -> SelectionOutcome {
        if pending.new_nodes == pending.old_nodes && pending.new_nodes.len() == 1 {
            let ruleset = pending.new_nodes[0].ruleset.clone();
            info!(ticket = %pending.ticket, ruleset_id = ?ruleset.id, "discarding edits, reloading ruleset");
            self.replace_viewer(Some(ruleset));
            return SelectionOutcome::Reloaded;
        }

        info!(ticket = %pending.ticket, "discarding edits, applying selection");
        self.on_selection_changed(&pending.new_nodes);
        SelectionOutcome::Applied
    }

    /// Sync selection and viewer to `nodes` without any modified check.
    ///
    /// Exactly one node loads a copy of its ruleset; zero or many clear the viewer.
    pub fn on_selection_changed(&mut self, nodes: &[RulesetNode]) {
        self.selected_ids = nodes.iter().filter_map(RulesetNode::id).collect();
        let ruleset = match nodes {
            [single] => Some(single.ruleset.clone()),
            _ => None,
        };
        debug!(selected = ?self.selected_ids, "selection changed");
        self.replace_viewer(ruleset);
    }

    /// Load `ruleset` into the viewer.
    ///
    /// A pending confirmation guarded the edits being replaced, so its ticket
    /// is dropped and later resolves to [`SelectionOutcome::Ignored`].
    fn replace_viewer(&mut self, ruleset: Option<Ruleset>) {
        if let Some(pending) = self.pending.take() {
            info!(ticket = %pending.ticket, "viewer replaced, dropping pending selection");
        }
        self.viewer.set_ruleset(ruleset);
    }

    /// Open a newly created, unsaved ruleset in the viewer.
    ///
    /// Returns `false` when the host's add handler took over.
    pub fn on_add(&mut self, ruleset: Ruleset) -> bool {
        if !self.handlers.proceed(RulesetAction::Add, &ruleset) {
            debug!(name = %ruleset.name, "add handled by host");
            return false;
        }
        info!(name = %ruleset.name, lang = %ruleset.lang, "opening new ruleset");
        self.replace_viewer(Some(ruleset));
        true
    }

    /// Open an unsaved copy of `ruleset` in the viewer.
    ///
    /// Returns `false` when the host's copy handler took over.
    pub fn on_copy(&mut self, ruleset: &Ruleset) -> bool {
        if !self.handlers.proceed(RulesetAction::Copy, ruleset) {
            debug!(ruleset_id = ?ruleset.id, "copy handled by host");
            return false;
        }
        let mut copy = ruleset.clone();
        copy.id = None;
        copy.version = 0;
        copy.created_on = None;
        copy.last_modified = None;
        copy.name = format!("{} copy", ruleset.name);
        info!(source_id = ?ruleset.id, name = %copy.name, "opening ruleset copy");
        self.replace_viewer(Some(copy));
        true
    }

    /// Forget a deleted ruleset.
    ///
    /// Drops it from the selection, clears the viewer if it was open there and
    /// refreshes the list. Returns `false` when the host's delete handler took over.
    pub fn on_delete(&mut self, ruleset: &Ruleset) -> bool {
        if !self.handlers.proceed(RulesetAction::Delete, ruleset) {
            debug!(ruleset_id = ?ruleset.id, "delete handled by host");
            return false;
        }
        if let Some(id) = ruleset.id {
            self.selected_ids.retain(|selected| *selected != id);
        }
        let open = self
            .viewer
            .ruleset()
            .is_some_and(|current| current.id.is_some() && current.id == ruleset.id);
        if open {
            self.replace_viewer(None);
        }
        info!(ruleset_id = ?ruleset.id, "ruleset deleted");
        self.list.refresh();
        true
    }

    /// Whether the default save flow should run for `ruleset`.
    pub fn should_save(&self, ruleset: &Ruleset) -> bool {
        self.handlers.proceed(RulesetAction::Save, ruleset)
    }

    /// Refresh the list after a save; select a ruleset that was just created.
    pub fn on_save(&mut self, result: &SaveResult) {
        self.list.refresh();
        if result.success && result.is_new {
            if let Some(id) = result.ruleset.id {
                info!(ruleset_id = id, "selecting newly created ruleset");
                self.selected_ids = vec![id];
            }
        }
    }
}
