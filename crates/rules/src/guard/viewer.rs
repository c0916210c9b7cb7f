//! Collaborator seams: the rule viewer and the rule list.

use ruledesk_core::Ruleset;

/// The editor panel showing one ruleset.
///
/// The guard reads `is_modified` and replaces the ruleset; edit tracking
/// belongs to the viewer.
pub trait RuleViewer {
    fn is_modified(&self) -> bool;
    fn ruleset(&self) -> Option<&Ruleset>;
    /// Replace the displayed ruleset. Implementations reset `modified`.
    fn set_ruleset(&mut self, ruleset: Option<Ruleset>);
}

/// The rule list panel.
pub trait RulesetList {
    /// Re-fetch and redraw the list contents.
    fn refresh(&mut self);
}

impl<F: FnMut()> RulesetList for F {
    fn refresh(&mut self) {
        self()
    }
}

/// Plain in-memory viewer state.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    ruleset: Option<Ruleset>,
    modified: bool,
    /// Number of times a ruleset (or none) has been loaded.
    loads: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an edit to the open ruleset and flag it modified.
    ///
    /// No-op when nothing is open.
    pub fn edit(&mut self, f: impl FnOnce(&mut Ruleset)) {
        if let Some(ruleset) = self.ruleset.as_mut() {
            f(ruleset);
            self.modified = true;
        }
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl RuleViewer for ViewerState {
    fn is_modified(&self) -> bool {
        self.modified
    }

    fn ruleset(&self) -> Option<&Ruleset> {
        self.ruleset.as_ref()
    }

    fn set_ruleset(&mut self, ruleset: Option<Ruleset>) {
        self.ruleset = ruleset;
        self.modified = false;
        self.loads += 1;
    }
}
