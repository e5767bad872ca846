//! Tree renderer.
//!
//! A frame is two passes. The draw traversal borrows every piece of state
//! immutably and records what the user did as [`UiAction`]s; the owner then
//! applies those actions once the traversal is over. No map is mutated
//! while it is being walked, and a toggle clicked this frame shows its
//! effect from the next frame on.

use crate::fold::FoldState;
use crate::page::PageId;
use crate::registry::PageRegistry;
use crate::surface::{DrawSurface, Rect, ScrollArea, ScrollOffset};
use crate::tree::NodeId;

pub const OPEN_ALL_LABEL: &str = "Open All";
pub const CLOSE_ALL_LABEL: &str = "Close All";
pub const NO_CATEGORIES_LABEL: &str = "No categories found.";
pub const NO_PAGE_LABEL: &str = "No page selected.";

/// A state change requested during the draw pass.
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    /// A category header was toggled
    SetOpen { path: String, open: bool },
    /// A page entry was clicked
    OpenPage(PageId),
    OpenAll,
    CloseAll,
    CloseWindow,
    MoveWindow(Rect),
    ScrollSidebar(ScrollOffset),
    ScrollContent(ScrollOffset),
}

/// Depth-first, pre-order walk of the category tree.
pub struct TreeRenderer<'a> {
    registry: &'a PageRegistry,
    fold: &'a FoldState,
    selected: Option<PageId>,
    indent_width: f32,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(
        registry: &'a PageRegistry,
        fold: &'a FoldState,
        selected: Option<PageId>,
        indent_width: f32,
    ) -> Self {
        Self {
            registry,
            fold,
            selected,
            indent_width,
        }
    }

    /// Draw every root category in path order.
    pub fn render(&self, surface: &mut dyn DrawSurface, actions: &mut Vec<UiAction>) {
        for &root in self.registry.tree().roots() {
            self.render_category(root, surface, actions);
        }
    }

    fn render_category(
        &self,
        id: NodeId,
        surface: &mut dyn DrawSurface,
        actions: &mut Vec<UiAction>,
    ) {
        let node = self.registry.tree().node(id);
        let open = self.fold.is_open_or_default(node.path());
        let depth = node.depth();
        let indent = depth as f32 * self.indent_width;

        let toggled = surface.category_header(node.label(), indent, open);
        if toggled != open {
            actions.push(UiAction::SetOpen {
                path: node.path().to_string(),
                open: toggled,
            });
        }
        if !open {
            return;
        }

        let page_indent = (depth + 1) as f32 * self.indent_width;
        for &page_id in self.registry.pages_in(node.path()) {
            let Some(page) = self.registry.page(page_id) else {
                continue;
            };
            let selected = self.selected == Some(page_id);
            if surface.page_button(page.name(), page_indent, selected) {
                actions.push(UiAction::OpenPage(page_id));
            }
        }

        for &child in node.children() {
            self.render_category(child, surface, actions);
        }
    }
}

/// Everything one frame of the overlay window reads.
pub struct FrameView<'a> {
    pub title: &'a str,
    pub window: Rect,
    pub registry: &'a PageRegistry,
    pub fold: &'a FoldState,
    pub selected: Option<PageId>,
    pub indent_width: f32,
    pub sidebar_scroll: ScrollOffset,
    pub content_scroll: ScrollOffset,
}

/// Draw the whole window: toolbar and tree in the sidebar, the selected
/// page in the content pane. Returns the actions to apply afterwards.
pub fn render_frame(view: &FrameView<'_>, surface: &mut dyn DrawSurface) -> Vec<UiAction> {
    let mut actions = Vec::new();

    let response = surface.begin_window(view.title, view.window);
    if response.close_clicked {
        actions.push(UiAction::CloseWindow);
    }
    if response.rect != view.window {
        actions.push(UiAction::MoveWindow(response.rect));
    }

    let sidebar = surface.begin_scroll(ScrollArea::Sidebar, view.sidebar_scroll);
    if sidebar != view.sidebar_scroll {
        actions.push(UiAction::ScrollSidebar(sidebar));
    }
    if surface.button(OPEN_ALL_LABEL) {
        actions.push(UiAction::OpenAll);
    }
    if surface.button(CLOSE_ALL_LABEL) {
        actions.push(UiAction::CloseAll);
    }
    if view.registry.tree().is_empty() {
        surface.label(NO_CATEGORIES_LABEL);
    } else {
        TreeRenderer::new(view.registry, view.fold, view.selected, view.indent_width)
            .render(surface, &mut actions);
    }
    surface.end_scroll(ScrollArea::Sidebar);

    let content = surface.begin_scroll(ScrollArea::Content, view.content_scroll);
    if content != view.content_scroll {
        actions.push(UiAction::ScrollContent(content));
    }
    match view.selected.and_then(|id| view.registry.page(id)) {
        Some(page) => page.content().render(surface),
        None => surface.label(NO_PAGE_LABEL),
    }
    surface.end_scroll(ScrollArea::Content);

    surface.end_window();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::TextPage;
    use crate::surface::TextSurface;

    fn registry() -> PageRegistry {
        let mut registry = PageRegistry::new();
        registry.register("A", "P1", TextPage::new("one"));
        registry.register("A/B", "P2", TextPage::new("two"));
        registry.register("C", "P3", TextPage::new("three"));
        registry
    }

    fn draw(registry: &PageRegistry, fold: &FoldState, surface: &mut TextSurface) -> Vec<UiAction> {
        let mut actions = Vec::new();
        TreeRenderer::new(registry, fold, None, 15.0).render(surface, &mut actions);
        actions
    }

    #[test]
    fn test_collapsed_tree_shows_roots_only() {
        let registry = registry();
        let mut surface = TextSurface::new();
        draw(&registry, &FoldState::new(), &mut surface);
        assert_eq!(surface.lines(), &["► A", "► C"]);
    }

    #[test]
    fn test_open_category_lists_pages_before_children() {
        let registry = registry();
        let mut fold = FoldState::new();
        fold.set_open("A", true);
        fold.set_open("A/B", true);
        let mut surface = TextSurface::new();
        draw(&registry, &fold, &mut surface);
        assert_eq!(
            surface.lines(),
            &["▼ A", "  - P1", "  ▼ B", "    - P2", "► C"]
        );
    }

    #[test]
    fn test_closed_parent_hides_open_descendants() {
        let registry = registry();
        let mut fold = FoldState::new();
        fold.set_open("A", false);
        fold.set_open("A/B", true);
        let mut surface = TextSurface::new();
        draw(&registry, &fold, &mut surface);
        assert!(!surface.render().contains("P2"));
    }

    #[test]
    fn test_interactions_become_actions_without_mutation() {
        let registry = registry();
        let mut fold = FoldState::new();
        fold.set_open("A", true);
        let mut surface = TextSurface::new();
        surface.click_toggle("C");
        surface.click_page("P1");
        let actions = draw(&registry, &fold, &mut surface);
        let p1 = registry.find("A", "P1").unwrap();
        assert_eq!(
            actions,
            vec![
                UiAction::OpenPage(p1),
                UiAction::SetOpen { path: "C".to_string(), open: true },
            ]
        );
        assert_eq!(fold.get("C"), None);
    }

    #[test]
    fn test_selected_page_is_marked() {
        let registry = registry();
        let mut fold = FoldState::new();
        fold.set_open("C", true);
        let selected = registry.find("C", "P3");
        let mut surface = TextSurface::new();
        let mut actions = Vec::new();
        TreeRenderer::new(&registry, &fold, selected, 15.0).render(&mut surface, &mut actions);
        assert!(surface.lines().contains(&"  * P3".to_string()));
    }

    #[test]
    fn test_frame_placeholders() {
        let registry = PageRegistry::new();
        let fold = FoldState::new();
        let view = FrameView {
            title: "Wiki",
            window: Rect::new(0.0, 0.0, 10.0, 10.0),
            registry: &registry,
            fold: &fold,
            selected: None,
            indent_width: 15.0,
            sidebar_scroll: ScrollOffset::ORIGIN,
            content_scroll: ScrollOffset::ORIGIN,
        };
        let mut surface = TextSurface::new();
        let actions = render_frame(&view, &mut surface);
        assert!(actions.is_empty());
        assert_eq!(
            surface.lines(),
            &[
                "== Wiki ==",
                "[Open All]",
                "[Close All]",
                NO_CATEGORIES_LABEL,
                "--",
                NO_PAGE_LABEL,
            ]
        );
    }
}
