//! Attribute name matching: exact names or `*` / `?` globs.
//!
//! Globs are translated to anchored regular expressions, so matching cost is
//! linear in the attribute name whatever the pattern looks like.

use regex::Regex;
use tracing::warn;

/// A compiled attribute name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    /// `None` for patterns without wildcards, which must equal the value.
    regex: Option<Regex>,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Self {
        let regex = if pattern.contains(['*', '?']) {
            match Regex::new(&glob_to_regex(pattern)) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "attribute pattern rejected, matching it literally");
                    None
                }
            }
        } else {
            None
        };
        Self {
            source: pattern.to_string(),
            regex,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(value),
            None => self.source == value,
        }
    }
}

/// Translate a glob into an anchored regex: `*` is `.*`, `?` is `.`, the rest is literal.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');
    let mut literal = String::new();
    let mut last_star = false;
    for c in pattern.chars() {
        match c {
            '*' | '?' => {
                out.push_str(&regex::escape(&literal));
                literal.clear();
                if c == '?' {
                    out.push('.');
                    last_star = false;
                } else if !last_star {
                    out.push_str(".*");
                    last_star = true;
                }
            }
            other => {
                literal.push(other);
                last_star = false;
            }
        }
    }
    out.push_str(&regex::escape(&literal));
    out.push('$');
    out
}

/// Compile a list of patterns once for repeated matching.
pub fn compile_all(patterns: &[String]) -> Vec<NamePattern> {
    patterns.iter().map(|p| NamePattern::new(p)).collect()
}

/// Match `value` against a single `pattern`.
///
/// `*` matches any run of characters (including none), `?` exactly one.
/// A pattern without wildcards must equal the value.
pub fn string_match(pattern: &str, value: &str) -> bool {
    pattern == value || NamePattern::new(pattern).is_match(value)
}

/// True when `value` matches at least one of `patterns`.
pub fn matches_any(patterns: &[NamePattern], value: &str) -> bool {
    patterns.iter().any(|p| p.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names() {
        assert!(string_match("temperature", "temperature"));
        assert!(!string_match("temperature", "temperatureSetpoint"));
        assert!(!string_match("", "temperature"));
    }

    #[test]
    fn prefix_and_suffix_globs() {
        assert!(string_match("temp*", "temperature"));
        assert!(string_match("temp*", "temp"));
        assert!(string_match("*Setpoint", "temperatureSetpoint"));
        assert!(!string_match("*Setpoint", "setpointTemperature"));
        assert!(string_match("*", "anything"));
    }

    #[test]
    fn inner_globs() {
        assert!(string_match("light*Status", "lightOnOffStatus"));
        assert!(string_match("co?", "co2"));
        assert!(!string_match("co?", "co"));
        assert!(string_match("a**b", "axxb"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(string_match("power.kw*", "power.kwh"));
        assert!(!string_match("power.kw*", "powerXkwh"));
        assert!(string_match("(raw)*", "(raw)value"));
        assert!(!string_match("^temp", "temperature"));
    }

    #[test]
    fn glob_translation_is_anchored() {
        assert_eq!(glob_to_regex("temp*"), "^temp.*$");
        assert_eq!(glob_to_regex("co?"), "^co.$");
        assert_eq!(glob_to_regex("a***b"), "^a.*b$");
        assert_eq!(glob_to_regex("a.b*"), r"^a\.b.*$");
    }

    #[test]
    fn many_stars_against_long_name() {
        let name = "a".repeat(4096);
        let pattern = NamePattern::new("*a*a*a*a*a*a*a*a*a*a*a*a*b");
        assert!(!pattern.is_match(&name));
        assert!(NamePattern::new("*a*a*a*a*a*a*a*a*a*a*a*a*").is_match(&name));
    }

    #[test]
    fn any_of_patterns() {
        let patterns = compile_all(&["notes".to_string(), "loc*".to_string()]);
        assert_eq!(patterns[1].as_str(), "loc*");
        assert!(matches_any(&patterns, "location"));
        assert!(matches_any(&patterns, "notes"));
        assert!(!matches_any(&patterns, "temperature"));
        assert!(!matches_any(&[], "temperature"));
    }
}
