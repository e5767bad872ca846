//! Persistence boundary for fold state.
//!
//! The core only produces and consumes the serialized open-list string.
//! Where that string lives is up to the host: [`MemoryPersistence`] keeps it
//! in memory, [`SettingsFile`] keeps it in a JSON settings document next to
//! the overlay configuration.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::OverlayConfig;
use crate::error::Result;

/// Durable home of the serialized fold state.
pub trait FoldStatePersistence {
    /// The last saved string, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the saved string.
    fn save(&mut self, serialized: &str) -> Result<()>;

    /// Pick up changes made by someone else since the last load.
    fn reload(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory persistence.
///
/// Clones share the same slot, so a host or test can keep a handle after
/// giving one to the overlay.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Slot>>,
}

#[derive(Debug, Default)]
struct Slot {
    value: Option<String>,
    saves: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved string.
    pub fn with_value(value: impl Into<String>) -> Self {
        let persistence = Self::default();
        persistence.slot.borrow_mut().value = Some(value.into());
        persistence
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().value.clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.slot.borrow().saves
    }
}

impl FoldStatePersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        slot.value = Some(serialized.to_string());
        slot.saves += 1;
        Ok(())
    }
}

/// Contents of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Comma-joined list of expanded category paths
    pub saved_fold_state: String,
    /// Overlay configuration
    pub overlay: OverlayConfig,
}

/// JSON settings file holding the fold state and overlay config.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    settings: Settings,
}

impl SettingsFile {
    /// Open the settings file at `path`, using defaults if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let settings = Self::read(&path)?;
        Ok(Self { path, settings })
    }

    fn read(path: &Path) -> Result<Settings> {
        if !path.exists() {
            debug!(path = ?path, "No settings file, using defaults");
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.overlay.validate()?;
        info!(path = ?path, "Loaded settings");
        Ok(settings)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn overlay_config(&self) -> &OverlayConfig {
        &self.settings.overlay
    }

    /// Replace the overlay config and write the file.
    pub fn set_overlay_config(&mut self, config: OverlayConfig) -> Result<()> {
        config.validate()?;
        self.settings.overlay = config;
        self.write()
    }

    /// Write through a temporary file so a crash never leaves a torn document.
    fn write(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.settings)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = ?self.path, "Wrote settings");
        Ok(())
    }
}

impl FoldStatePersistence for SettingsFile {
    fn load(&self) -> Result<Option<String>> {
        let saved = &self.settings.saved_fold_state;
        Ok((!saved.is_empty()).then(|| saved.clone()))
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        self.settings.saved_fold_state = serialized.to_string();
        self.write()
    }

    /// Re-read the file, picking up edits made outside the overlay.
    fn reload(&mut self) -> Result<()> {
        self.settings = Self::read(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_persistence_shares_slot() {
        let handle = MemoryPersistence::new();
        let mut given_away = handle.clone();
        assert_eq!(handle.load().unwrap(), None);
        given_away.save("A,A/B").unwrap();
        assert_eq!(handle.value().as_deref(), Some("A,A/B"));
        assert_eq!(handle.save_count(), 1);
    }

    #[test]
    fn test_settings_file_missing_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let file = SettingsFile::open(dir.path().join("tome.json")).unwrap();
        assert_eq!(file.settings(), &Settings::default());
        assert_eq!(file.load().unwrap(), None);
    }

    #[test]
    fn test_settings_file_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tome.json");
        let mut file = SettingsFile::open(&path).unwrap();
        file.save("Characters,Characters/NPCs").unwrap();

        let reopened = SettingsFile::open(&path).unwrap();
        assert_eq!(
            reopened.load().unwrap().as_deref(),
            Some("Characters,Characters/NPCs")
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_settings_file_reload_sees_external_edit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tome.json");
        let mut file = SettingsFile::open(&path).unwrap();
        file.save("A").unwrap();

        fs::write(&path, r#"{"saved_fold_state":"A,B"}"#).unwrap();
        file.reload().unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("A,B"));
        assert_eq!(file.overlay_config(), &OverlayConfig::default());
    }

    #[test]
    fn test_settings_file_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tome.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SettingsFile::open(&path),
            Err(crate::error::TomeError::Settings(_))
        ));
    }

    #[test]
    fn test_set_overlay_config_validates() {
        let dir = TempDir::new().unwrap();
        let mut file = SettingsFile::open(dir.path().join("tome.json")).unwrap();
        let bad = OverlayConfig::default().with_indent_width(-3.0);
        assert!(file.set_overlay_config(bad).is_err());
        let good = OverlayConfig::default().with_title("Guide");
        file.set_overlay_config(good.clone()).unwrap();
        assert_eq!(file.overlay_config(), &good);
    }
}
