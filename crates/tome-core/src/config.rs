//! Configuration for the overlay window and tree

use serde::{Deserialize, Serialize};

use crate::error::{Result, TomeError};
use crate::surface::Rect;

/// Overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Window title shown when no page is selected
    pub title: String,
    /// Horizontal indentation per tree level, in surface units
    pub indent_width: f32,
    /// Initial window placement
    pub window: Rect,
    /// Fold state given to a category the first time it is seen
    pub expand_new_categories: bool,
    /// Whether the overlay starts shown
    pub start_visible: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "Wiki".to_string(),
            indent_width: 15.0,
            window: Rect::new(200.0, 200.0, 1730.0, 1000.0),
            expand_new_categories: false,
            start_visible: false,
        }
    }
}

impl OverlayConfig {
    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the per-level indentation
    pub fn with_indent_width(mut self, indent_width: f32) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Set the initial window placement
    pub fn with_window(mut self, window: Rect) -> Self {
        self.window = window;
        self
    }

    /// Choose whether brand-new categories start expanded
    pub fn with_expand_new_categories(mut self, expand: bool) -> Self {
        self.expand_new_categories = expand;
        self
    }

    /// Choose whether the overlay starts shown
    pub fn with_start_visible(mut self, visible: bool) -> Self {
        self.start_visible = visible;
        self
    }

    /// Reject values a surface cannot lay out
    pub fn validate(&self) -> Result<()> {
        if !self.indent_width.is_finite() || self.indent_width < 0.0 {
            return Err(TomeError::invalid_config(format!(
                "indent_width must be a non-negative number, got {}",
                self.indent_width
            )));
        }
        let Rect { x, y, width, height } = self.window;
        if [x, y, width, height].iter().any(|v| !v.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(TomeError::invalid_config(format!(
                "window must have finite coordinates and non-negative size, got {:?}",
                self.window
            )));
        }
        Ok(())
    }
}
