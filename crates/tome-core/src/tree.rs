//! Category tree builder.
//!
//! The tree is an arena: nodes live in a flat vector addressed by [`NodeId`],
//! each full path is interned once, and children are stored as id lists
//! already sorted by full path. Every rebuild starts from scratch.

use std::collections::HashMap;

use crate::category;

/// Index of a node inside the [`CategoryTree`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One category in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    path: String,
    parent: Option<NodeId>,
    depth: usize,
    children: Vec<NodeId>,
}

impl CategoryNode {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last segment of the path.
    pub fn label(&self) -> &str {
        category::label(&self.path)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Direct children, ordered by full path.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Hierarchy of every category implied by the registered pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
    index: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
}

impl CategoryTree {
    /// Build the tree for a set of category paths.
    ///
    /// Every prefix of every path becomes a node, each prefix beyond the
    /// first is linked under its immediate parent exactly once, and roots
    /// are exactly the separator-free prefixes. Input order and duplicates
    /// do not affect the result.
    pub fn build<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tree = Self::default();
        for path in categories {
            let mut parent = None;
            for prefix in category::prefixes(path) {
                let id = tree.intern(prefix, parent);
                if let Some(parent_id) = parent {
                    let siblings = &mut tree.nodes[parent_id.0].children;
                    if !siblings.contains(&id) {
                        siblings.push(id);
                    }
                }
                parent = Some(id);
            }
        }
        tree.sort_children();
        tree
    }

    fn intern(&mut self, path: &str, parent: Option<NodeId>) -> NodeId {
        if let Some(&id) = self.index.get(path) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        let depth = parent.map_or(0, |p| self.nodes[p.0].depth + 1);
        self.nodes.push(CategoryNode {
            path: path.to_string(),
            parent,
            depth,
            children: Vec::new(),
        });
        self.index.insert(path.to_string(), id);
        if parent.is_none() {
            self.roots.push(id);
        }
        id
    }

    fn sort_children(&mut self) {
        for i in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[i].children);
            children.sort_by(|a, b| self.nodes[a.0].path.cmp(&self.nodes[b.0].path));
            self.nodes[i].children = children;
        }
        let mut roots = std::mem::take(&mut self.roots);
        roots.sort_by(|a, b| self.nodes[a.0].path.cmp(&self.nodes[b.0].path));
        self.roots = roots;
    }

    /// Root categories, ordered by path.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different tree.
    pub fn node(&self, id: NodeId) -> &CategoryNode {
        &self.nodes[id.0]
    }

    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_paths(&self) -> Vec<&str> {
        self.roots.iter().map(|&id| self.node(id).path()).collect()
    }

    /// Paths of the direct children of `path`, or `None` if it is not a node.
    pub fn child_paths(&self, path: &str) -> Option<Vec<&str>> {
        let node = self.node(self.lookup(path)?);
        Some(node.children.iter().map(|&id| self.node(id).path()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_are_separator_free() {
        let tree = CategoryTree::build(["A", "A/B", "A/B/C"]);
        assert_eq!(tree.root_paths(), vec!["A"]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_intermediate_categories_are_created() {
        let tree = CategoryTree::build(["Characters/NPCs/Names"]);
        assert!(tree.contains("Characters"));
        assert!(tree.contains("Characters/NPCs"));
        assert!(tree.contains("Characters/NPCs/Names"));
        assert_eq!(tree.child_paths("Characters"), Some(vec!["Characters/NPCs"]));
        assert_eq!(tree.child_paths("Characters/NPCs/Names"), Some(vec![]));
    }

    #[test]
    fn test_children_sorted_and_deduplicated() {
        let tree = CategoryTree::build(["A/c", "A/a", "A/b", "A/a", "A/a/x"]);
        assert_eq!(tree.child_paths("A"), Some(vec!["A/a", "A/b", "A/c"]));
        assert_eq!(tree.child_paths("A/a"), Some(vec!["A/a/x"]));
    }

    #[test]
    fn test_depth_and_parent_links() {
        let tree = CategoryTree::build(["X/Y/Z"]);
        let z = tree.node(tree.lookup("X/Y/Z").unwrap());
        assert_eq!(z.depth(), 2);
        assert_eq!(z.label(), "Z");
        let y = tree.node(z.parent().unwrap());
        assert_eq!(y.path(), "X/Y");
        assert!(tree.node(y.parent().unwrap()).is_root());
    }

    #[test]
    fn test_empty_and_malformed_paths_preserved() {
        let tree = CategoryTree::build(["", "/Lead", "A//B", "Trail/"]);
        assert_eq!(tree.root_paths(), vec!["", "A", "Trail"]);
        assert_eq!(tree.child_paths(""), Some(vec!["/Lead"]));
        assert_eq!(tree.child_paths("A"), Some(vec!["A/"]));
        assert_eq!(tree.child_paths("A/"), Some(vec!["A//B"]));
        assert_eq!(tree.child_paths("Trail"), Some(vec!["Trail/"]));
    }

    #[test]
    fn test_empty_input() {
        let tree = CategoryTree::build(std::iter::empty());
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }
}
