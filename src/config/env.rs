//! Process environment snapshot

use std::env;

/// Environment values the resolver falls back to.
///
/// Captured once at construction time. Tests inject a literal snapshot
/// instead of mutating the process environment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    /// Value of `EDITOR` at capture time
    pub editor: Option<String>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            editor: env::var("EDITOR").ok(),
        }
    }
}
