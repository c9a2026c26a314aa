//! Application configuration module
//!
//! Settings live in a single JSON file that is rewritten in full after every
//! mutation. The file sits in the OS-specific config directory resolved through
//! `directories`, and falls back to `./config.json` when there is none.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, CONFIG_FILE_NAME, DEFAULT_DEVICE_INDEX,
    DEFAULT_SCALE, DEFAULT_URL,
};
use crate::device::{BUILTIN_COUNT, DeviceError, DeviceProfile, builtin_devices};
use crate::layout::Scale;
use crate::theme::FrameTheme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid device: {0}")]
    Device(#[from] DeviceError),
}

/// Persisted state. Key names are part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL loaded on the last successful connect
    pub last_url: String,

    /// Index into the combined (built-in + custom) device list
    pub last_device_index: usize,

    pub last_frame_color: String,
    pub last_frame_border: String,

    pub last_scale: f64,

    /// User-defined devices in insertion order
    pub custom_devices: Vec<DeviceProfile>,
}

impl Default for Settings {
    fn default() -> Self {
        let (base, border) = FrameTheme::default().hex_pair();
        Self {
            last_url: DEFAULT_URL.to_string(),
            last_device_index: DEFAULT_DEVICE_INDEX,
            last_frame_color: base.to_string(),
            last_frame_border: border.to_string(),
            last_scale: DEFAULT_SCALE,
            custom_devices: Vec::new(),
        }
    }
}

/// Settings plus the file they are written to.
///
/// Owned by the app and handed out by `&mut`; every setter saves before
/// returning.
pub struct Config {
    path: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields defaults. An unreadable or malformed file is
    /// logged and also yields defaults; it is left untouched until the next
    /// save overwrites it.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => {
                    info!("Load config from {:?}", path);
                    sanitize(settings)
                }
                Err(e) => {
                    warn!("Config file {:?} is malformed, using defaults: {}", path, e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                warn!("Could not read config file {:?}, using defaults: {}", path, e);
                Settings::default()
            }
        };
        Self { path, settings }
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, content)?;
        info!("Save config to {:?}", self.path);
        Ok(())
    }

    /// Get the configuration file path
    /// Falls back to the working directory if platform dirs are unavailable
    pub fn config_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Device profiles
    // ------------------------------------------------------------------

    /// Built-ins in fixed order, then custom devices in insertion order.
    pub fn list_all(&self) -> Vec<DeviceProfile> {
        let mut devices = builtin_devices();
        devices.extend(self.settings.custom_devices.iter().cloned());
        devices
    }

    pub fn custom_devices(&self) -> &[DeviceProfile] {
        &self.settings.custom_devices
    }

    /// Map an index in [`Config::list_all`] to one in the custom list.
    pub fn custom_index(&self, combined: usize) -> Option<usize> {
        combined
            .checked_sub(BUILTIN_COUNT)
            .filter(|&i| i < self.settings.custom_devices.len())
    }

    pub fn add_custom_device(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        radius: u32,
    ) -> Result<(), ConfigError> {
        let profile = DeviceProfile::new(name, width, height, radius)?;
        info!("Adding custom device {}", profile);
        self.settings.custom_devices.push(profile);
        self.save()
    }

    /// Replace the custom device at `index`. Returns `Ok(false)` without
    /// writing anything when `index` is out of range.
    pub fn update_custom_device(
        &mut self,
        index: usize,
        name: &str,
        width: u32,
        height: u32,
        radius: u32,
    ) -> Result<bool, ConfigError> {
        if index >= self.settings.custom_devices.len() {
            return Ok(false);
        }
        let profile = DeviceProfile::new(name, width, height, radius)?;
        info!("Updating custom device {} to {}", index, profile);
        self.settings.custom_devices[index] = profile;
        self.save()?;
        Ok(true)
    }

    /// Remove the custom device at `index`. Returns `Ok(false)` without
    /// writing anything when `index` is out of range.
    pub fn delete_custom_device(&mut self, index: usize) -> Result<bool, ConfigError> {
        if index >= self.settings.custom_devices.len() {
            return Ok(false);
        }
        let removed = self.settings.custom_devices.remove(index);
        info!("Deleted custom device {}", removed);
        // Keep the selection on the same profile when an earlier entry goes away
        let selected = &mut self.settings.last_device_index;
        if BUILTIN_COUNT + index < *selected {
            *selected -= 1;
        }
        let device_count = BUILTIN_COUNT + self.settings.custom_devices.len();
        if *selected >= device_count {
            *selected = device_count - 1;
        }
        self.save()?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Layout and session state
    // ------------------------------------------------------------------

    /// Selected device index, clamped into the combined list.
    pub fn device_index(&self) -> usize {
        let device_count = BUILTIN_COUNT + self.settings.custom_devices.len();
        self.settings.last_device_index.min(device_count - 1)
    }

    pub fn current_device(&self) -> DeviceProfile {
        let mut devices = self.list_all();
        devices.swap_remove(self.device_index())
    }

    pub fn set_device_index(&mut self, index: usize) -> Result<(), ConfigError> {
        self.settings.last_device_index = index;
        self.save()
    }

    /// Persisted scale, or the default if the stored value is out of range.
    pub fn scale(&self) -> Scale {
        Scale::new(self.settings.last_scale).unwrap_or_default()
    }

    pub fn set_scale(&mut self, scale: Scale) -> Result<(), ConfigError> {
        self.settings.last_scale = scale.get();
        self.save()
    }

    /// Persisted frame theme, or the default if the colors match none.
    pub fn theme(&self) -> FrameTheme {
        FrameTheme::from_colors(
            &self.settings.last_frame_color,
            &self.settings.last_frame_border,
        )
        .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: FrameTheme) -> Result<(), ConfigError> {
        let (base, border) = theme.hex_pair();
        self.settings.last_frame_color = base.to_string();
        self.settings.last_frame_border = border.to_string();
        self.save()
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.settings.last_url = url.to_string();
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}

/// Drop custom devices a hand-edited file may have broken.
fn sanitize(mut settings: Settings) -> Settings {
    settings.custom_devices.retain(|device| match device.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!("Ignoring custom device {:?}: {}", device.name, e);
            false
        }
    });
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn setup_test_config() -> (Config, PathBuf) {
        let test_dir = std::env::temp_dir().join(format!("test_config_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let config = Config::load_from(test_dir.join(CONFIG_FILE_NAME));
        (config, test_dir)
    }

    fn cleanup_test_dir(test_dir: &Path) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (config, test_dir) = setup_test_config();

        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.settings.last_url, "http://localhost:5173");
        assert_eq!(config.device_index(), 2);
        assert_eq!(config.scale().get(), 0.7);
        assert_eq!(config.theme(), FrameTheme::Obsidian);
        assert!(!config.path().exists(), "Loading must not create the file");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_add_appends_to_custom_segment() {
        let (mut config, test_dir) = setup_test_config();
        assert_eq!(config.list_all().len(), 5);

        config.add_custom_device("Test", 300, 600, 20).unwrap();

        let all = config.list_all();
        assert_eq!(all.len(), 6);
        assert_eq!(
            all.last().unwrap(),
            &DeviceProfile::new("Test", 300, 600, 20).unwrap()
        );
        assert_eq!(&all[..5], &builtin_devices()[..]);

        let reloaded = Config::load_from(config.path());
        assert_eq!(reloaded.custom_devices(), config.custom_devices());

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_add_rejects_invalid_device() {
        let (mut config, test_dir) = setup_test_config();

        let result = config.add_custom_device("Broken", 0, 600, 20);
        assert!(matches!(result, Err(ConfigError::Device(_))));
        assert!(config.custom_devices().is_empty());
        assert!(!config.path().exists());

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_delete_last_custom_device() {
        let (mut config, test_dir) = setup_test_config();
        config.add_custom_device("A", 300, 600, 20).unwrap();
        config.add_custom_device("B", 320, 640, 30).unwrap();

        let last = config.custom_devices().len() - 1;
        assert!(config.delete_custom_device(last).unwrap());

        assert_eq!(config.custom_devices().len(), 1);
        assert_eq!(config.custom_devices()[0].name, "A");
        assert_eq!(&config.list_all()[..5], &builtin_devices()[..]);

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let (mut config, test_dir) = setup_test_config();
        config.add_custom_device("A", 300, 600, 20).unwrap();
        config.set_device_index(5).unwrap();

        config.delete_custom_device(0).unwrap();
        assert_eq!(config.settings.last_device_index, 4);

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_delete_before_selection_keeps_profile() {
        let (mut config, test_dir) = setup_test_config();
        config.add_custom_device("A", 300, 600, 20).unwrap();
        config.add_custom_device("B", 320, 640, 30).unwrap();
        config.add_custom_device("C", 340, 680, 40).unwrap();
        config.set_device_index(6).unwrap();
        assert_eq!(config.current_device().name, "B");

        config.delete_custom_device(0).unwrap();
        assert_eq!(config.settings.last_device_index, 5);
        assert_eq!(config.current_device().name, "B");

        // Deleting after the selection leaves it alone
        config.delete_custom_device(1).unwrap();
        assert_eq!(config.current_device().name, "B");
        assert_eq!(Config::load_from(config.path()).settings.last_device_index, 5);

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_out_of_bounds_mutations_are_noops() {
        let (mut config, test_dir) = setup_test_config();

        assert!(!config.update_custom_device(0, "X", 1, 1, 1).unwrap());
        assert!(!config.delete_custom_device(3).unwrap());
        assert!(!config.path().exists(), "No-ops must not write");

        config.add_custom_device("A", 300, 600, 20).unwrap();
        let before = config.custom_devices().to_vec();

        // Combined index 5 is custom index 0; passing it as a custom index is out of range.
        assert!(!config.update_custom_device(5, "X", 1, 1, 1).unwrap());
        assert_eq!(config.custom_devices(), &before[..]);

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (mut config, test_dir) = setup_test_config();
        config.add_custom_device("A", 300, 600, 20).unwrap();
        config.add_custom_device("B", 320, 640, 30).unwrap();

        assert!(config.update_custom_device(0, "A2", 310, 610, 25).unwrap());
        assert_eq!(
            config.custom_devices()[0],
            DeviceProfile::new("A2", 310, 610, 25).unwrap()
        );
        assert_eq!(config.custom_devices()[1].name, "B");

        let reloaded = Config::load_from(config.path());
        assert_eq!(reloaded.custom_devices()[0].name, "A2");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_custom_index_offset() {
        let (mut config, test_dir) = setup_test_config();
        config.add_custom_device("A", 300, 600, 20).unwrap();

        assert_eq!(config.custom_index(0), None);
        assert_eq!(config.custom_index(4), None);
        assert_eq!(config.custom_index(5), Some(0));
        assert_eq!(config.custom_index(6), None);

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let (config, test_dir) = setup_test_config();
        fs::write(config.path(), "{ not json").unwrap();

        let reloaded = Config::load_from(config.path());
        assert_eq!(reloaded.settings, Settings::default());
        assert_eq!(fs::read_to_string(config.path()).unwrap(), "{ not json");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_partial_file_and_invalid_entries() {
        let (config, test_dir) = setup_test_config();
        fs::write(
            config.path(),
            r##"{
                "last_scale": 0.9,
                "last_frame_color": "#d4af37",
                "last_frame_border": "#b8860b",
                "custom_devices": [
                    {"name": "Good", "width": 300, "height": 600, "radius": 20},
                    {"name": "Bad", "width": 0, "height": 600, "radius": 20}
                ]
            }"##,
        )
        .unwrap();

        let reloaded = Config::load_from(config.path());
        assert_eq!(reloaded.settings.last_url, DEFAULT_URL);
        assert_eq!(reloaded.scale().get(), 0.9);
        assert_eq!(reloaded.theme(), FrameTheme::Gold);
        assert_eq!(reloaded.custom_devices().len(), 1);
        assert_eq!(reloaded.custom_devices()[0].name, "Good");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_session_state_round_trip() {
        let (mut config, test_dir) = setup_test_config();

        config.set_scale(Scale::new(0.6).unwrap()).unwrap();
        config.set_theme(FrameTheme::Pearl).unwrap();
        config.set_url("http://example.test").unwrap();
        config.set_device_index(4).unwrap();

        let reloaded = Config::load_from(config.path());
        assert_eq!(reloaded.scale().get(), 0.6);
        assert_eq!(reloaded.theme(), FrameTheme::Pearl);
        assert_eq!(reloaded.settings.last_frame_color, "#f0f0f0");
        assert_eq!(reloaded.settings.last_url, "http://example.test");
        assert_eq!(reloaded.current_device().name, "iPhone Mini");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let (mut config, test_dir) = setup_test_config();
        config.settings.last_scale = 4.0;
        config.settings.last_device_index = 99;
        config.settings.last_frame_color = "chartreuse".to_string();

        assert_eq!(config.scale(), Scale::default());
        assert_eq!(config.device_index(), 4);
        assert_eq!(config.theme(), FrameTheme::Obsidian);

        cleanup_test_dir(&test_dir);
    }
}
