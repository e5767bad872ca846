//! The overlay session.
//!
//! [`Wiki`] owns everything one overlay instance needs: the page registry,
//! fold state, navigator, configuration and the persistence collaborator.
//! Hosts construct it explicitly and hand out `&mut Wiki` to whoever
//! registers pages or deep-links into them.

use tracing::{debug, info, trace, warn};

use crate::config::OverlayConfig;
use crate::error::Result;
use crate::fold::FoldState;
use crate::navigator::Navigator;
use crate::page::{Page, PageContent, PageId};
use crate::persistence::{FoldStatePersistence, MemoryPersistence};
use crate::registry::PageRegistry;
use crate::render::{self, FrameView, UiAction};
use crate::surface::{DrawSurface, Rect, ScrollOffset};
use crate::tree::CategoryTree;

/// One in-game documentation overlay.
pub struct Wiki {
    config: OverlayConfig,
    registry: PageRegistry,
    fold: FoldState,
    navigator: Navigator,
    persistence: Box<dyn FoldStatePersistence>,
    visible: bool,
    window: Rect,
    sidebar_scroll: ScrollOffset,
}

impl Wiki {
    /// Create an overlay that keeps its fold state in memory only.
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_persistence(config, MemoryPersistence::new())
    }

    /// Create an overlay that saves fold state through `persistence`.
    pub fn with_persistence(
        config: OverlayConfig,
        persistence: impl FoldStatePersistence + 'static,
    ) -> Self {
        Self {
            fold: FoldState::with_default_open(config.expand_new_categories),
            visible: config.start_visible,
            window: config.window,
            config,
            registry: PageRegistry::new(),
            navigator: Navigator::new(),
            persistence: Box::new(persistence),
            sidebar_scroll: ScrollOffset::ORIGIN,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Register a page and rebuild the category tree.
    pub fn register_page(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        content: impl PageContent + 'static,
    ) -> PageId {
        let id = self.registry.register(category, name, content);
        let added = self.fold.ensure_nodes(self.registry.tree());
        if added > 0 {
            debug!(added, "New categories discovered");
        }
        id
    }

    /// All pages in registration order.
    pub fn list_pages(&self) -> &[Page] {
        self.registry.pages()
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn tree(&self) -> &CategoryTree {
        self.registry.tree()
    }

    pub fn fold_state(&self) -> &FoldState {
        &self.fold
    }

    /// Whether `path` is expanded, recording the default for unseen paths.
    pub fn is_open(&mut self, path: &str) -> bool {
        self.fold.is_open(path)
    }

    /// Expand or collapse one category and persist.
    pub fn set_open(&mut self, path: &str, open: bool) {
        trace!(path, open, "Toggled category");
        self.fold.set_open(path, open);
        self.persist();
    }

    pub fn open_all(&mut self) {
        self.fold.open_all();
        self.persist();
    }

    pub fn close_all(&mut self) {
        self.fold.close_all();
        self.persist();
    }

    /// Open the first page matching `category` and `name`.
    ///
    /// Returns false, changing nothing, when no page matches.
    pub fn open_page(&mut self, category: &str, name: &str) -> bool {
        match self.registry.find(category, name) {
            Some(id) => self.open_page_id(id),
            None => {
                debug!(category, name, "No page to open");
                false
            }
        }
    }

    /// Open a page by id. Returns false for an unknown id.
    pub fn open_page_id(&mut self, id: PageId) -> bool {
        let Some(page) = self.registry.page(id) else {
            return false;
        };
        self.navigator.open(page, &mut self.fold);
        self.persist();
        true
    }

    pub fn selected_page(&self) -> Option<&Page> {
        self.navigator.selected().and_then(|id| self.registry.page(id))
    }

    pub fn content_scroll(&self) -> ScrollOffset {
        self.navigator.content_scroll()
    }

    pub fn set_content_scroll(&mut self, offset: ScrollOffset) {
        self.navigator.set_content_scroll(offset);
    }

    pub fn serialize_fold_state(&self) -> String {
        self.fold.serialize()
    }

    /// Force open every path in a serialized open-list.
    pub fn load_fold_state(&mut self, serialized: &str) {
        self.fold.deserialize(serialized);
    }

    /// Load the fold state the persistence collaborator last saved.
    pub fn load_persisted(&mut self) -> Result<()> {
        if let Some(saved) = self.persistence.load()? {
            self.load_fold_state(&saved);
            info!(open = self.fold.open_paths().count(), "Restored fold state");
        }
        Ok(())
    }

    /// Re-read the persisted fold state after an outside edit and force
    /// every listed path open. Paths not listed keep their current value.
    pub fn reload_persisted(&mut self) -> Result<()> {
        self.persistence.reload()?;
        self.load_persisted()
    }

    fn persist(&mut self) {
        let serialized = self.fold.serialize();
        if let Err(e) = self.persistence.save(&serialized) {
            warn!(error = %e, "Failed to persist fold state");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn window_rect(&self) -> Rect {
        self.window
    }

    /// `"<title>"`, or `"<title> - <page>"` while a page is selected.
    pub fn window_title(&self) -> String {
        match self.selected_page() {
            Some(page) => format!("{} - {}", self.config.title, page.name()),
            None => self.config.title.clone(),
        }
    }

    /// Draw one frame, then apply whatever the user did during it.
    /// Does nothing while hidden.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        if !self.visible {
            return;
        }
        let title = self.window_title();
        let view = FrameView {
            title: &title,
            window: self.window,
            registry: &self.registry,
            fold: &self.fold,
            selected: self.navigator.selected(),
            indent_width: self.config.indent_width,
            sidebar_scroll: self.sidebar_scroll,
            content_scroll: self.navigator.content_scroll(),
        };
        let actions = render::render_frame(&view, surface);
        self.apply(actions);
    }

    /// Apply actions collected by a draw pass, in order.
    ///
    /// A content scroll reported after a page switch in the same batch
    /// belongs to the page that was drawn, so it is dropped and the new page
    /// stays at the origin.
    pub fn apply(&mut self, actions: Vec<UiAction>) {
        let mut switched_page = false;
        for action in actions {
            match action {
                UiAction::SetOpen { path, open } => self.set_open(&path, open),
                UiAction::OpenPage(id) => {
                    let before = self.navigator.selected();
                    self.open_page_id(id);
                    switched_page |= self.navigator.selected() != before;
                }
                UiAction::OpenAll => self.open_all(),
                UiAction::CloseAll => self.close_all(),
                UiAction::CloseWindow => self.hide(),
                UiAction::MoveWindow(rect) => self.window = rect,
                UiAction::ScrollSidebar(offset) => self.sidebar_scroll = offset,
                UiAction::ScrollContent(_) if switched_page => {
                    trace!("Dropped stale content scroll after page switch");
                }
                UiAction::ScrollContent(offset) => self.navigator.set_content_scroll(offset),
            }
        }
    }
}
