//! Abstract drawing surface.
//!
//! The overlay never draws pixels itself. Each frame it issues requests to a
//! [`DrawSurface`] supplied by the host, which maps them onto whatever
//! immediate-mode toolkit is in use. Controls report interaction through
//! their return values, immediate-mode style.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Position of a scrollable region's viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

/// Window placement in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// The two scrollable panes of the overlay window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollArea {
    Sidebar,
    Content,
}

/// What the host reports back when the window is begun.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowResponse {
    /// Placement after any drag the host applied this frame
    pub rect: Rect,
    /// The window's close control was clicked
    pub close_clicked: bool,
}

/// Immediate-mode drawing requests issued by the overlay.
pub trait DrawSurface {
    /// Begin the overlay window.
    fn begin_window(&mut self, title: &str, rect: Rect) -> WindowResponse;

    fn end_window(&mut self);

    /// Begin a scroll region, returning the offset after user scrolling.
    fn begin_scroll(&mut self, area: ScrollArea, offset: ScrollOffset) -> ScrollOffset;

    fn end_scroll(&mut self, area: ScrollArea);

    fn label(&mut self, text: &str);

    /// A plain button. Returns true when clicked.
    fn button(&mut self, text: &str) -> bool;

    /// A collapsible category header. Returns the open state after this
    /// frame's interaction (equal to `open` when untouched).
    fn category_header(&mut self, label: &str, indent: f32, open: bool) -> bool;

    /// A selectable page entry. Returns true when clicked.
    fn page_button(&mut self, name: &str, indent: f32, selected: bool) -> bool;
}

/// A scripted user interaction for [`TextSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Click the category header with this label
    Toggle(String),
    /// Click the page entry with this name
    Page(String),
    /// Click the button with this text
    Button(String),
    /// Click the window's close control
    CloseWindow,
}

/// A surface that renders to an indented text outline.
///
/// Interactions queued with [`TextSurface::click`] fire on the first matching
/// control drawn afterwards, which makes it usable for headless hosts and
/// for driving frames in tests.
#[derive(Debug, Clone)]
pub struct TextSurface {
    lines: Vec<String>,
    indent_unit: f32,
    pending: Vec<Interaction>,
    scroll_to: HashMap<ScrollArea, ScrollOffset>,
    seen_offsets: HashMap<ScrollArea, ScrollOffset>,
    drag_to: Option<Rect>,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent_unit: 15.0,
            pending: Vec::new(),
            scroll_to: HashMap::new(),
            seen_offsets: HashMap::new(),
            drag_to: None,
        }
    }

    /// Surface units that map to one level (two spaces) of text indentation.
    pub fn with_indent_unit(mut self, unit: f32) -> Self {
        self.indent_unit = unit;
        self
    }

    /// Queue an interaction for the next matching control.
    pub fn click(&mut self, interaction: Interaction) {
        self.pending.push(interaction);
    }

    pub fn click_toggle(&mut self, label: impl Into<String>) {
        self.click(Interaction::Toggle(label.into()));
    }

    pub fn click_page(&mut self, name: impl Into<String>) {
        self.click(Interaction::Page(name.into()));
    }

    pub fn click_button(&mut self, text: impl Into<String>) {
        self.click(Interaction::Button(text.into()));
    }

    /// Scroll `area` to `offset` the next time it is drawn.
    pub fn scroll(&mut self, area: ScrollArea, offset: ScrollOffset) {
        self.scroll_to.insert(area, offset);
    }

    /// Drag the window to `rect` the next time it is drawn.
    pub fn drag_window_to(&mut self, rect: Rect) {
        self.drag_to = Some(rect);
    }

    /// Interactions that have not matched any control yet.
    pub fn pending(&self) -> &[Interaction] {
        &self.pending
    }

    /// The offset the overlay passed in for `area` on the last frame.
    pub fn offset_seen(&self, area: ScrollArea) -> Option<ScrollOffset> {
        self.seen_offsets.get(&area).copied()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The outline drawn so far, one control per line.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Forget drawn lines, ready for the next frame.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn take(&mut self, interaction: &Interaction) -> bool {
        match self.pending.iter().position(|p| p == interaction) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        }
    }

    fn pad(&self, indent: f32) -> String {
        let levels = if self.indent_unit > 0.0 {
            (indent / self.indent_unit).round().max(0.0) as usize
        } else {
            0
        };
        "  ".repeat(levels)
    }
}

impl DrawSurface for TextSurface {
    fn begin_window(&mut self, title: &str, rect: Rect) -> WindowResponse {
        self.lines.push(format!("== {title} =="));
        WindowResponse {
            rect: self.drag_to.take().unwrap_or(rect),
            close_clicked: self.take(&Interaction::CloseWindow),
        }
    }

    fn end_window(&mut self) {}

    fn begin_scroll(&mut self, area: ScrollArea, offset: ScrollOffset) -> ScrollOffset {
        if area == ScrollArea::Content {
            self.lines.push("--".to_string());
        }
        self.seen_offsets.insert(area, offset);
        self.scroll_to.remove(&area).unwrap_or(offset)
    }

    fn end_scroll(&mut self, _area: ScrollArea) {}

    fn label(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn button(&mut self, text: &str) -> bool {
        self.lines.push(format!("[{text}]"));
        self.take(&Interaction::Button(text.to_string()))
    }

    fn category_header(&mut self, label: &str, indent: f32, open: bool) -> bool {
        let arrow = if open { '▼' } else { '►' };
        self.lines.push(format!("{}{arrow} {label}", self.pad(indent)));
        if self.take(&Interaction::Toggle(label.to_string())) {
            !open
        } else {
            open
        }
    }

    fn page_button(&mut self, name: &str, indent: f32, selected: bool) -> bool {
        let marker = if selected { '*' } else { '-' };
        self.lines.push(format!("{}{marker} {name}", self.pad(indent)));
        self.take(&Interaction::Page(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_toggle_consumes_click_once() {
        let mut surface = TextSurface::new();
        surface.click_toggle("NPCs");
        assert!(surface.category_header("NPCs", 15.0, false));
        assert!(!surface.category_header("NPCs", 15.0, false));
        assert_eq!(surface.lines(), &["  ► NPCs", "  ► NPCs"]);
    }

    #[test]
    fn test_scroll_override_applies_once() {
        let mut surface = TextSurface::new();
        surface.scroll(ScrollArea::Content, ScrollOffset::new(0.0, 40.0));
        let first = surface.begin_scroll(ScrollArea::Content, ScrollOffset::ORIGIN);
        assert_eq!(first, ScrollOffset::new(0.0, 40.0));
        let second = surface.begin_scroll(ScrollArea::Content, first);
        assert_eq!(second, first);
        assert_eq!(surface.offset_seen(ScrollArea::Content), Some(first));
    }

    #[test]
    fn test_unmatched_clicks_stay_pending() {
        let mut surface = TextSurface::new();
        surface.click_page("Missing");
        assert!(!surface.page_button("Other", 0.0, false));
        assert_eq!(surface.pending(), &[Interaction::Page("Missing".to_string())]);
    }

    #[test]
    fn test_window_close_and_drag() {
        let mut surface = TextSurface::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let moved = Rect::new(10.0, 20.0, 100.0, 100.0);
        surface.drag_window_to(moved);
        surface.click(Interaction::CloseWindow);
        let response = surface.begin_window("Wiki", rect);
        assert_eq!(response.rect, moved);
        assert!(response.close_clicked);
    }
}
