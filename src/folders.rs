use std::collections::HashMap;

use serde::Serialize;

/// One path segment in the folder aggregate tree.
///
/// `file_changes` counts every diff event whose path passes through this
/// segment prefix. Children are keyed by segment name and exclusively owned
/// by their parent; ordering is left to the renderers.
#[derive(Debug, Serialize)]
pub struct FolderStat {
    pub name: String,
    pub file_changes: usize,
    pub is_root: bool,
    pub children: HashMap<String, FolderStat>,
}

impl FolderStat {
    fn new(name: &str, is_root: bool) -> Self {
        Self {
            name: name.to_string(),
            file_changes: 0,
            is_root,
            children: HashMap::new(),
        }
    }
}

/// Accumulates change counts at every directory level of every path seen.
#[derive(Debug, Serialize)]
pub struct FolderTree {
    root: FolderStat,
}

impl Default for FolderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderTree {
    pub fn new() -> Self {
        Self {
            root: FolderStat::new(".", true),
        }
    }

    /// Add `weight` at every node from the synthetic root down to (but not
    /// including) the path's leaf segment. Nodes are created lazily on
    /// first sight. A path with no separator counts only at the root.
    pub fn accumulate(&mut self, path: &str, weight: usize) {
        self.root.file_changes += weight;

        let mut node = &mut self.root;
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            // the last segment is the file name, not a folder
            if segments.peek().is_none() {
                break;
            }
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(|| FolderStat::new(segment, false));
            node.file_changes += weight;
        }
    }

    pub fn root(&self) -> &FolderStat {
        &self.root
    }
}

#[cfg(test)]
#[path = "folders_test.rs"]
mod tests;
