use std::collections::BTreeMap;

use serde::Serialize;

/// Append-only, path-keyed collection of data-violation messages.
///
/// Keys are fully-qualified dotted paths into the data tree. Messages under
/// one path keep insertion order (first failure first); iteration across
/// paths is sorted. The report serializes as a plain path → messages map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation message under a path. A path may accumulate any
    /// number of messages.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(path.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of paths holding at least one message.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all paths.
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// The messages recorded under a path, in insertion order.
    pub fn messages(&self, path: &str) -> Option<&[String]> {
        self.errors.get(path).map(Vec::as_slice)
    }

    /// Iterate paths and their messages in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }
}
