//! Page selection and ancestor auto-expansion.

use tracing::trace;

use crate::category;
use crate::fold::FoldState;
use crate::page::{Page, PageId};
use crate::surface::ScrollOffset;

/// Force `category` and every ancestor of it open.
///
/// Walks deepest first by stripping the final `/segment` until no separator
/// remains. Never collapses anything.
pub fn expand_ancestors(category: &str, fold: &mut FoldState) {
    for path in category::ancestors(category) {
        fold.set_open(path, true);
    }
}

/// The selected page and the content pane's view state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigator {
    selected: Option<PageId>,
    content_scroll: ScrollOffset,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<PageId> {
        self.selected
    }

    pub fn is_selected(&self, id: PageId) -> bool {
        self.selected == Some(id)
    }

    pub fn content_scroll(&self) -> ScrollOffset {
        self.content_scroll
    }

    pub fn set_content_scroll(&mut self, offset: ScrollOffset) {
        self.content_scroll = offset;
    }

    /// Select `page` and expand its category chain.
    ///
    /// Selecting a different page resets the content scroll to the origin.
    /// Re-selecting the current page leaves the view untouched but still
    /// expands its ancestors. Returns true if the selection changed.
    pub fn open(&mut self, page: &Page, fold: &mut FoldState) -> bool {
        let changed = !self.is_selected(page.id());
        if changed {
            self.selected = Some(page.id());
            self.content_scroll = ScrollOffset::ORIGIN;
        }
        expand_ancestors(page.category(), fold);
        trace!(id = %page.id(), changed, "Opened page");
        changed
    }
}
