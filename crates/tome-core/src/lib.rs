//! # Tome Core
//!
//! The engine behind the Tome in-game documentation overlay.
//!
//! Third-party code registers named pages under slash-delimited category
//! paths. The overlay shows them in a collapsible category tree and renders
//! the selected page in a scrollable pane.
//!
//! ## Features
//!
//! - **PageRegistry**: append-only page list with a category tree rebuilt on
//!   every registration
//! - **CategoryTree**: arena of category nodes with interned paths and
//!   pre-sorted children
//! - **FoldState**: expanded/collapsed flags that survive rebuilds and
//!   round-trip through a comma-joined string
//! - **Navigator**: page selection that forces the page's category chain open
//! - **TreeRenderer**: two-pass drawing against any [`DrawSurface`]
//!
//! ## Example
//!
//! ```rust
//! use tome_core::{OverlayConfig, TextPage, TextSurface, Wiki};
//!
//! let mut wiki = Wiki::new(OverlayConfig::default().with_start_visible(true));
//! wiki.register_page("Characters/NPCs", "Names", TextPage::new("Aki\nBren"));
//!
//! assert!(wiki.open_page("Characters/NPCs", "Names"));
//! assert_eq!(wiki.serialize_fold_state(), "Characters,Characters/NPCs");
//!
//! let mut surface = TextSurface::new();
//! wiki.draw(&mut surface);
//! assert!(surface.render().contains("* Names"));
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod fold;
pub mod navigator;
pub mod page;
pub mod persistence;
pub mod registry;
pub mod render;
pub mod surface;
pub mod tree;
pub mod wiki;

// Re-exports
pub use config::OverlayConfig;
pub use error::{Result, TomeError};
pub use fold::FoldState;
pub use navigator::{Navigator, expand_ancestors};
pub use page::{Page, PageContent, PageId, TextPage};
pub use persistence::{FoldStatePersistence, MemoryPersistence, Settings, SettingsFile};
pub use registry::{PageRegistry, group_by_category};
pub use render::{FrameView, TreeRenderer, UiAction, render_frame};
pub use surface::{
    DrawSurface, Interaction, Rect, ScrollArea, ScrollOffset, TextSurface, WindowResponse,
};
pub use tree::{CategoryNode, CategoryTree, NodeId};
pub use wiki::Wiki;
