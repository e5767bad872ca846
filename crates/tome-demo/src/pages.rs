//! Sample pages, registered the way third-party plugins would.

use tome_core::{DrawSurface, TextPage, Wiki};

pub fn register_samples(wiki: &mut Wiki) {
    wiki.register_page(
        "Getting Started",
        "Welcome",
        TextPage::new("Press F3 to show or hide this window.\nPick a page on the left."),
    );
    wiki.register_page(
        "Characters/NPCs",
        "Names",
        TextPage::new("Aki - innkeeper\nBren - smith\nCora - cartographer"),
    );
    wiki.register_page(
        "Characters/NPCs/Schedules",
        "Daily",
        TextPage::new("Shops open at 8 and close at 20."),
    );
    wiki.register_page(
        "Characters/Players",
        "Creation",
        TextPage::new("Sliders reset when you change body type."),
    );
    wiki.register_page("Studio/Lighting", "Presets", |ui: &mut dyn DrawSurface| {
        ui.label("Presets are stored per scene.");
        if ui.button("Show shortcut") {
            ui.label("Ctrl+L cycles presets.");
        }
    });
    wiki.register_page(
        "Studio",
        "Camera",
        TextPage::new("Hold right mouse to orbit.\nScroll to zoom."),
    );
}
