// Window size constants
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const WINDOW_PADDING_X: u32 = 100;
pub const WINDOW_PADDING_Y: u32 = 150;
pub const DEFAULT_WINDOW_TITLE: &str = "Mobile Simulator";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "app";
pub const APP_ORGANIZATION: &str = "mobile-sim";
pub const APP_NAME: &str = "Mobile Simulator";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults used when no config file exists
pub const DEFAULT_URL: &str = "http://localhost:5173";
pub const DEFAULT_DEVICE_INDEX: usize = 2;
pub const DEFAULT_SCALE: f64 = 0.7;
pub const MAX_SCALE: f64 = 1.2;

/// Bezel geometry, in unscaled device pixels
pub const BEZEL_BASE_WIDTH: u32 = 16;
pub const BLEED: u32 = 1;
pub const NOTCH_WIDTH: u32 = 120;
pub const NOTCH_HEIGHT: u32 = 28;
pub const NOTCH_GAP: u32 = 10;

/// Chrome inside and around the phone
pub const CONTROL_PANEL_HEIGHT: f32 = 50.0;
pub const STATUS_BAR_HEIGHT: u32 = 44;
pub const STATUS_BAR_PADDING: u32 = 25;
pub const COPYRIGHT_OFFSET: u32 = 12;
pub const COPYRIGHT_TEXT: &str = "© Mobile Simulator";
pub const PHONE_AREA_TOP_GAP: f32 = 10.0;
