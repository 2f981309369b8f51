//! Logical keyword IDs and trigger-word resolution.

use serde::{Deserialize, Serialize};

/// Logical keyword IDs the dispatcher understands.
///
/// The user configures a trigger word per ID; the host delivers the
/// trigger word, and dispatch maps it back to the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordId {
    /// Daemon information view.
    Info,
    /// System prune.
    Prune,
    /// Documentation search.
    Documentation,
    /// Container list view.
    Containers,
}

impl KeywordId {
    /// Returns the stable identifier used in logs and preferences.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "kw_info",
            Self::Prune => "kw_prune",
            Self::Documentation => "kw_documentation",
            Self::Containers => "kw_containers",
        }
    }
}

/// User-configured trigger words, one per logical keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    /// Trigger for the daemon info view.
    pub info: String,
    /// Trigger for system prune.
    pub prune: String,
    /// Trigger for documentation search.
    pub documentation: String,
    /// Trigger for the container list.
    pub containers: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            info: "dki".to_string(),
            prune: "dkprune".to_string(),
            documentation: "dkdocs".to_string(),
            containers: "dk".to_string(),
        }
    }
}

impl Keywords {
    /// Resolves a trigger word to its logical keyword.
    ///
    /// Unrecognized trigger words fall back to the container list, so a
    /// host delivering an unexpected keyword still gets a useful view.
    #[must_use]
    pub fn resolve(&self, trigger: &str) -> KeywordId {
        if trigger == self.info {
            KeywordId::Info
        } else if trigger == self.prune {
            KeywordId::Prune
        } else if trigger == self.documentation {
            KeywordId::Documentation
        } else {
            KeywordId::Containers
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_defaults() {
        let kw = Keywords::default();
        assert_eq!(kw.resolve("dki"), KeywordId::Info);
        assert_eq!(kw.resolve("dkprune"), KeywordId::Prune);
        assert_eq!(kw.resolve("dkdocs"), KeywordId::Documentation);
        assert_eq!(kw.resolve("dk"), KeywordId::Containers);
    }

    #[test]
    fn test_unknown_trigger_falls_back_to_containers() {
        let kw = Keywords::default();
        assert_eq!(kw.resolve("whatever"), KeywordId::Containers);
        assert_eq!(kw.resolve(""), KeywordId::Containers);
    }

    #[test]
    fn test_resolve_custom_triggers() {
        let kw = Keywords {
            info: "di".to_string(),
            ..Keywords::default()
        };
        assert_eq!(kw.resolve("di"), KeywordId::Info);
        assert_eq!(kw.resolve("dki"), KeywordId::Containers);
    }
}
