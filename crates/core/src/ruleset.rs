use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted ruleset identifier.
pub type RulesetId = i64;

/// Where a ruleset applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RulesetScope {
    Global,
    Realm {
        realm: String,
    },
    Asset {
        #[serde(rename = "assetId")]
        asset_id: String,
    },
}

/// Language the rules source is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RulesetLang {
    Json,
    Flow,
    Groovy,
    Javascript,
}

impl fmt::Display for RulesetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesetLang::Json => write!(f, "JSON"),
            RulesetLang::Flow => write!(f, "FLOW"),
            RulesetLang::Groovy => write!(f, "GROOVY"),
            RulesetLang::Javascript => write!(f, "JAVASCRIPT"),
        }
    }
}

/// A rule definition managed by the host's persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruleset {
    /// `None` until the ruleset has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RulesetId>,
    pub name: String,
    pub lang: RulesetLang,
    pub scope: RulesetScope,
    #[serde(default)]
    pub rules: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl Ruleset {
    /// A fresh, unsaved ruleset.
    pub fn new(name: impl Into<String>, lang: RulesetLang, scope: RulesetScope) -> Self {
        Self {
            id: None,
            name: name.into(),
            lang,
            scope,
            rules: String::new(),
            enabled: true,
            version: 0,
            created_on: None,
            last_modified: None,
            meta: serde_json::Map::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

fn default_true() -> bool {
    true
}

/// One entry of the rule list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesetNode {
    pub ruleset: Ruleset,
    #[serde(default)]
    pub selected: bool,
}

impl RulesetNode {
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            selected: false,
        }
    }

    pub fn id(&self) -> Option<RulesetId> {
        self.ruleset.id
    }
}
