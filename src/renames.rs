use std::collections::HashMap;

/// Tracks path renames observed while walking commit history.
///
/// Every retired path maps to a live canonical path. The aggregator resolves
/// each rename target through this map before recording the alias, so a
/// chain A→B→C collapses to two entries both pointing at C even though the
/// time-sorted walk sees B→C before A→B. Resolution is a single lookup.
#[derive(Debug, Default)]
pub struct RenameResolver {
    retired: HashMap<String, String>,
}

impl RenameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `old` was renamed to `new`.
    ///
    /// The first rename of a path wins as its permanent alias — the walk is
    /// chronological, so the first time a path is retired is authoritative
    /// for all of its history. Returns true when the alias was inserted.
    pub fn record_rename(&mut self, old: &str, new: &str) -> bool {
        if old == new || self.retired.contains_key(old) {
            return false;
        }
        self.retired.insert(old.to_string(), new.to_string());
        true
    }

    /// Resolve a path to its canonical (current) name.
    ///
    /// Retired paths redirect to their rename target; anything else is
    /// already canonical.
    pub fn canonical<'a>(&'a self, path: &'a str) -> &'a str {
        self.retired.get(path).map_or(path, String::as_str)
    }

    /// Whether this path has been retired by a rename.
    pub fn is_retired(&self, path: &str) -> bool {
        self.retired.contains_key(path)
    }
}

#[cfg(test)]
#[path = "renames_test.rs"]
mod tests;
