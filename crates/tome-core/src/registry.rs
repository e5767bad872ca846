//! Page registry.
//!
//! An append-only list of pages plus the indexes derived from it: the
//! per-category grouping and the [`CategoryTree`]. Both indexes are rebuilt
//! in full on every registration and swapped in together, so readers never
//! observe a half-built tree.

use std::collections::HashMap;

use tracing::debug;

use crate::page::{Page, PageContent, PageId};
use crate::tree::CategoryTree;

/// Partition pages by exact category path, keeping registration order
/// within each group.
pub fn group_by_category(pages: &[Page]) -> HashMap<String, Vec<PageId>> {
    let mut groups: HashMap<String, Vec<PageId>> = HashMap::new();
    for page in pages {
        groups
            .entry(page.category().to_string())
            .or_default()
            .push(page.id());
    }
    groups
}

/// Registered pages and their derived category structure.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
    by_category: HashMap<String, Vec<PageId>>,
    tree: CategoryTree,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page and rebuild the category indexes.
    ///
    /// Duplicate (category, name) pairs are accepted; each registration gets
    /// its own [`PageId`].
    pub fn register(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        content: impl PageContent + 'static,
    ) -> PageId {
        let id = PageId(self.pages.len());
        let page = Page::new(id, category.into(), name.into(), Box::new(content));
        debug!(%id, category = page.category(), name = page.name(), "Registering page");
        self.pages.push(page);
        self.rebuild();
        id
    }

    /// Recompute the grouping and the tree from the page list.
    pub fn rebuild(&mut self) {
        let by_category = group_by_category(&self.pages);
        let mut categories: Vec<&str> = by_category.keys().map(String::as_str).collect();
        categories.sort_unstable();
        let tree = CategoryTree::build(categories);
        debug!(
            pages = self.pages.len(),
            categories = by_category.len(),
            nodes = tree.len(),
            "Rebuilt category tree"
        );
        self.by_category = by_category;
        self.tree = tree;
    }

    /// All pages in registration order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0)
    }

    /// Pages registered directly under `category` (not its descendants).
    pub fn pages_in(&self, category: &str) -> &[PageId] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First page matching both fields.
    pub fn find(&self, category: &str, name: &str) -> Option<PageId> {
        self.pages
            .iter()
            .find(|page| page.category() == category && page.name() == name)
            .map(Page::id)
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::TextPage;

    fn sample() -> PageRegistry {
        let mut registry = PageRegistry::new();
        registry.register("A", "P1", TextPage::new("one"));
        registry.register("A/B", "P2", TextPage::new("two"));
        registry.register("C", "P3", TextPage::new("three"));
        registry
    }

    #[test]
    fn test_register_rebuilds_tree() {
        let registry = sample();
        assert_eq!(registry.tree().root_paths(), vec!["A", "C"]);
        assert_eq!(registry.tree().child_paths("A"), Some(vec!["A/B"]));
    }

    #[test]
    fn test_register_after_build_extends_tree() {
        let mut registry = sample();
        registry.register("A/D/E", "P4", TextPage::new("four"));
        assert_eq!(registry.tree().child_paths("A"), Some(vec!["A/B", "A/D"]));
        assert!(registry.tree().contains("A/D/E"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = sample();
        let names: Vec<&str> = registry.pages().iter().map(Page::name).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_group_by_category_preserves_relative_order() {
        let mut registry = PageRegistry::new();
        let first = registry.register("Guides", "Zeta", TextPage::default());
        registry.register("Other", "Mid", TextPage::default());
        let second = registry.register("Guides", "Alpha", TextPage::default());
        assert_eq!(registry.pages_in("Guides"), &[first, second]);
        assert!(registry.pages_in("Guides/Sub").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_and_find_returns_first() {
        let mut registry = PageRegistry::new();
        let first = registry.register("A", "Same", TextPage::new("first"));
        let second = registry.register("A", "Same", TextPage::new("second"));
        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("A", "Same"), Some(first));
        assert_eq!(registry.pages_in("A"), &[first, second]);
    }

    #[test]
    fn test_find_miss() {
        let registry = sample();
        assert_eq!(registry.find("A", "P2"), None);
        assert_eq!(registry.find("Nope", "P1"), None);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut registry = sample();
        let before = registry.tree().clone();
        registry.rebuild();
        assert_eq!(registry.tree(), &before);
    }
}
