//! Host-supplied ruleset action handlers.

use std::fmt;

use ruledesk_core::Ruleset;

/// Handler returning whether the editor's default handling should still run.
pub type HostHandler = Box<dyn Fn(&Ruleset) -> bool + Send + Sync>;

/// Ruleset actions a host may intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulesetAction {
    Add,
    Delete,
    Copy,
    Save,
}

impl fmt::Display for RulesetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesetAction::Add => write!(f, "add"),
            RulesetAction::Delete => write!(f, "delete"),
            RulesetAction::Copy => write!(f, "copy"),
            RulesetAction::Save => write!(f, "save"),
        }
    }
}

/// Optional per-action handlers. A missing handler lets default handling run.
#[derive(Default)]
pub struct HostHandlers {
    add: Option<HostHandler>,
    delete: Option<HostHandler>,
    copy: Option<HostHandler>,
    save: Option<HostHandler>,
}

impl HostHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add(mut self, handler: impl Fn(&Ruleset) -> bool + Send + Sync + 'static) -> Self {
        self.add = Some(Box::new(handler));
        self
    }

    pub fn on_delete(mut self, handler: impl Fn(&Ruleset) -> bool + Send + Sync + 'static) -> Self {
        self.delete = Some(Box::new(handler));
        self
    }

    pub fn on_copy(mut self, handler: impl Fn(&Ruleset) -> bool + Send + Sync + 'static) -> Self {
        self.copy = Some(Box::new(handler));
        self
    }

    pub fn on_save(mut self, handler: impl Fn(&Ruleset) -> bool + Send + Sync + 'static) -> Self {
        self.save = Some(Box::new(handler));
        self
    }

    fn handler(&self, action: RulesetAction) -> Option<&HostHandler> {
        match action {
            RulesetAction::Add => self.add.as_ref(),
            RulesetAction::Delete => self.delete.as_ref(),
            RulesetAction::Copy => self.copy.as_ref(),
            RulesetAction::Save => self.save.as_ref(),
        }
    }

    /// Run the handler for `action`, if any. `true` means default handling proceeds.
    pub fn proceed(&self, action: RulesetAction, ruleset: &Ruleset) -> bool {
        self.handler(action).map_or(true, |h| h(ruleset))
    }
}

impl fmt::Debug for HostHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandlers")
            .field("add", &self.add.is_some())
            .field("delete", &self.delete.is_some())
            .field("copy", &self.copy.is_some())
            .field("save", &self.save.is_some())
            .finish()
    }
}
