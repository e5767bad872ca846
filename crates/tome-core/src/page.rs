//! Registered pages and their content capability.

use std::fmt;

use crate::surface::DrawSurface;

/// Renders a page's body into the current surface.
///
/// The overlay never inspects what a page draws; it only calls `render`
/// while the page is selected and the content pane is visible.
pub trait PageContent {
    fn render(&self, surface: &mut dyn DrawSurface);
}

impl<F> PageContent for F
where
    F: Fn(&mut dyn DrawSurface),
{
    fn render(&self, surface: &mut dyn DrawSurface) {
        self(surface)
    }
}

/// Static text content, one label per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextPage {
    lines: Vec<String>,
}

impl TextPage {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl PageContent for TextPage {
    fn render(&self, surface: &mut dyn DrawSurface) {
        for line in &self.lines {
            surface.label(line);
        }
    }
}

/// Stable handle to a registered page (its registration index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) usize);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// A registered page. Immutable once created.
pub struct Page {
    id: PageId,
    category: String,
    name: String,
    content: Box<dyn PageContent>,
}

impl Page {
    pub(crate) fn new(
        id: PageId,
        category: String,
        name: String,
        content: Box<dyn PageContent>,
    ) -> Self {
        Self {
            id,
            category,
            name,
            content,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    /// Full category path, e.g. `"Characters/NPCs"`.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &dyn PageContent {
        self.content.as_ref()
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
