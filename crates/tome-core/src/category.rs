//! Category path algebra.
//!
//! A category path is a `/`-delimited string such as `"Characters/NPCs"`.
//! Paths are compared verbatim: no trimming, no case folding, and empty
//! segments (`"A//B"`, `"/A"`, `"A/"`) are kept exactly as written.

/// Separator between the segments of a category path.
pub const SEPARATOR: char = '/';

/// Split a path into its segments, keeping empty ones.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

/// Every ancestor-or-self prefix of `path`, shortest first.
///
/// `"A/B/C"` yields `"A"`, `"A/B"`, `"A/B/C"`. A leading separator yields the
/// empty root first: `"/A"` yields `""`, `"/A"`.
pub fn prefixes(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices(SEPARATOR)
        .map(move |(idx, _)| &path[..idx])
        .chain(std::iter::once(path))
}

/// `path` followed by each of its ancestors, deepest first.
///
/// This is the same set as [`prefixes`] in reverse order.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(path), |current| parent(*current))
}

/// The immediate parent path, or `None` for a root category.
pub fn parent(path: &str) -> Option<&str> {
    path.rfind(SEPARATOR).map(|idx| &path[..idx])
}

/// The display label: the text after the final separator.
pub fn label(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// A root category is one without any separator.
pub fn is_root(path: &str) -> bool {
    !path.contains(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_shortest_first() {
        let got: Vec<&str> = prefixes("A/B/C").collect();
        assert_eq!(got, vec!["A", "A/B", "A/B/C"]);
    }

    #[test]
    fn test_prefixes_keep_empty_segments() {
        assert_eq!(prefixes("/A").collect::<Vec<_>>(), vec!["", "/A"]);
        assert_eq!(prefixes("A//B").collect::<Vec<_>>(), vec!["A", "A/", "A//B"]);
        assert_eq!(prefixes("A/").collect::<Vec<_>>(), vec!["A", "A/"]);
        assert_eq!(prefixes("").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_ancestors_match_prefixes() {
        for path in ["A", "A/B/C", "/A", "A//B", "", "x/y/"] {
            let mut forward: Vec<&str> = prefixes(path).collect();
            forward.reverse();
            let backward: Vec<&str> = ancestors(path).collect();
            assert_eq!(forward, backward, "path {path:?}");
        }
    }

    #[test]
    fn test_parent_and_label() {
        assert_eq!(parent("A/B/C"), Some("A/B"));
        assert_eq!(parent("A"), None);
        assert_eq!(parent("/A"), Some(""));
        assert_eq!(label("Characters/NPCs"), "NPCs");
        assert_eq!(label("Characters"), "Characters");
        assert_eq!(label("A/"), "");
    }

    #[test]
    fn test_root_and_segments() {
        assert!(is_root("A"));
        assert!(is_root(""));
        assert!(!is_root("A/B"));
        assert_eq!(segments("A//B").count(), 3);
    }
}
