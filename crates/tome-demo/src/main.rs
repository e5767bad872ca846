//! Headless host for the Tome overlay.
//!
//! Registers a handful of sample pages the way game plugins would, restores
//! the saved fold state, then draws frames to stdout, optionally clicking
//! controls in between.

mod pages;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tome_core::{SettingsFile, TextSurface, Wiki};
use tome_logging::{LogConfig, TomeSubscriberBuilder};

#[derive(Debug, Parser)]
#[command(name = "tome-demo", about = "Drive the Tome overlay without a game")]
struct Args {
    /// Settings file holding overlay config and saved fold state
    #[arg(long, default_value = "tome-settings.json")]
    settings: PathBuf,

    /// Deep-link to a page, given as CATEGORY:NAME
    #[arg(long, value_name = "CATEGORY:NAME")]
    open: Option<String>,

    /// Category headers to click, in order, one per frame
    #[arg(long = "toggle", value_name = "LABEL")]
    toggles: Vec<String>,

    /// Expand every category before drawing
    #[arg(long)]
    open_all: bool,

    /// Store a new window title in the settings file
    #[arg(long)]
    title: Option<String>,

    /// Re-read the settings file before the last frame, picking up outside edits
    #[arg(long)]
    reload: bool,

    /// Human-readable log output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = if args.pretty {
        LogConfig::development()
    } else {
        LogConfig::testing()
    };
    let _guard = TomeSubscriberBuilder::new().with_config(log_config).init();

    let mut settings = SettingsFile::open(&args.settings)
        .with_context(|| format!("opening settings at {}", args.settings.display()))?;
    if let Some(title) = &args.title {
        let config = settings.overlay_config().clone().with_title(title.clone());
        settings
            .set_overlay_config(config)
            .context("saving window title")?;
    }
    let config = settings.overlay_config().clone().with_start_visible(true);

    let mut wiki = Wiki::with_persistence(config, settings);
    wiki.load_persisted().context("restoring fold state")?;
    pages::register_samples(&mut wiki);
    tracing::info!(pages = wiki.list_pages().len(), "Sample pages registered");

    if args.open_all {
        wiki.open_all();
    }
    if let Some(target) = &args.open {
        let (category, name) = target
            .rsplit_once(':')
            .with_context(|| format!("expected CATEGORY:NAME, got {target:?}"))?;
        if !wiki.open_page(category, name) {
            tracing::warn!(category, name, "No such page");
        }
    }

    let mut surface = TextSurface::new().with_indent_unit(wiki.config().indent_width);
    for label in &args.toggles {
        surface.click_toggle(label.clone());
        wiki.draw(&mut surface);
        surface.clear();
    }
    if args.reload {
        wiki.reload_persisted().context("reloading settings")?;
    }
    wiki.draw(&mut surface);
    println!("{}", surface.render());
    println!();
    println!("saved fold state: {:?}", wiki.serialize_fold_state());
    Ok(())
}
