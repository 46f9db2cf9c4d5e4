//! Name-based tool whitelist.

use crate::config::{ConfigError, Result};
use std::collections::HashSet;

/// Immutable set of tool names that callers may invoke directly.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    allowed: HashSet<String>,
}

impl AccessPolicy {
    /// Build from the configured `allowedTools` list. Duplicates collapse; an empty list is
    /// rejected.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: HashSet<String> = names.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            return Err(ConfigError::invalid("'allowedTools' must not be empty"));
        }
        Ok(Self { allowed })
    }

    /// Case-sensitive membership test.
    pub fn is_allowed(&self, tool_name: &str) -> bool {
        self.allowed.contains(tool_name)
    }

    /// Allowed names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.allowed.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
