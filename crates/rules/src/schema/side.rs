//! Editing side enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of a rule is being authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Condition authoring.
    When,
    /// Action authoring.
    Action,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::When => write!(f, "when"),
            Side::Action => write!(f, "action"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "when" => Ok(Side::When),
            "action" => Ok(Side::Action),
            other => Err(format!("unknown side: '{}'", other)),
        }
    }
}
