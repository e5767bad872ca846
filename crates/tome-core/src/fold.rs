//! Fold state store.
//!
//! Maps category paths to expanded/collapsed. Entries are created lazily,
//! never removed, and never overwritten by a default: only an explicit
//! `set_open`, a bulk open/close, or a deserialized open-list changes an
//! existing value.

use std::collections::BTreeMap;

use crate::tree::CategoryTree;

/// Separator of the serialized open-list.
const LIST_SEPARATOR: char = ',';

/// Per-category expanded/collapsed flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoldState {
    entries: BTreeMap<String, bool>,
    default_open: bool,
}

impl FoldState {
    /// Store whose new entries start collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose new entries start with `default_open`.
    pub fn with_default_open(default_open: bool) -> Self {
        Self {
            entries: BTreeMap::new(),
            default_open,
        }
    }

    /// Current state of `path`, recording the default if it was unseen.
    pub fn is_open(&mut self, path: &str) -> bool {
        if let Some(&open) = self.entries.get(path) {
            return open;
        }
        self.entries.insert(path.to_string(), self.default_open);
        self.default_open
    }

    /// Stored state of `path`, if any.
    pub fn get(&self, path: &str) -> Option<bool> {
        self.entries.get(path).copied()
    }

    /// Stored state of `path`, or the default without recording it.
    pub fn is_open_or_default(&self, path: &str) -> bool {
        self.get(path).unwrap_or(self.default_open)
    }

    pub fn set_open(&mut self, path: &str, open: bool) {
        match self.entries.get_mut(path) {
            Some(value) => *value = open,
            None => {
                self.entries.insert(path.to_string(), open);
            }
        }
    }

    /// Record the default for `path` if it has no entry. Returns true when
    /// an entry was added.
    pub fn ensure(&mut self, path: &str) -> bool {
        if self.entries.contains_key(path) {
            return false;
        }
        self.entries.insert(path.to_string(), self.default_open);
        true
    }

    /// Fill in defaults for every node of `tree`. Returns the number added.
    pub fn ensure_nodes(&mut self, tree: &CategoryTree) -> usize {
        tree.iter().filter(|node| self.ensure(node.path())).count()
    }

    /// Expand every known category.
    pub fn open_all(&mut self) {
        self.entries.values_mut().for_each(|open| *open = true);
    }

    /// Collapse every known category.
    pub fn close_all(&mut self) {
        self.entries.values_mut().for_each(|open| *open = false);
    }

    /// Paths currently expanded, in store order.
    pub fn open_paths(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, open)| **open)
            .map(|(path, _)| path.as_str())
    }

    /// Comma-joined list of expanded paths.
    pub fn serialize(&self) -> String {
        self.open_paths().collect::<Vec<_>>().join(",")
    }

    /// Force every listed path open. Unlisted paths keep their value and
    /// blank input changes nothing.
    pub fn deserialize(&mut self, serialized: &str) {
        if serialized.trim().is_empty() {
            return;
        }
        for path in serialized.split(LIST_SEPARATOR) {
            self.set_open(path, true);
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
