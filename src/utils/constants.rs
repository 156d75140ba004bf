/// AQI bin edges; six half-open bins, the last one closed
pub const AQI_BIN_EDGES: [f64; 7] = [0.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0];

/// AQI category labels, one per bin
pub const AQI_LABELS: [&str; 6] = [
    "Good",
    "Satisfactory",
    "Moderate",
    "Poor",
    "Very Poor",
    "Severe",
];

/// AQI category colors: green, yellow, amber, orange, red, maroon
pub const AQI_COLORS: [&str; 6] = [
    "#00E676", "#FFFF00", "#FFC107", "#FF9800", "#F44336", "#880E4F",
];

/// Delhi metropolitan map window
pub const DELHI_LON_MIN: f64 = 76.8;
pub const DELHI_LON_MAX: f64 = 77.6;
pub const DELHI_LAT_MIN: f64 = 28.4;
pub const DELHI_LAT_MAX: f64 = 28.9;

/// Synthetic AQI formula: BASE + HOURLY_DRIFT * hour + hash % HASH_SPREAD
pub const SYNTHETIC_AQI_BASE: u32 = 50;
pub const SYNTHETIC_AQI_HOURLY_DRIFT: u32 = 5;
pub const SYNTHETIC_AQI_HASH_SPREAD: u64 = 100;
pub const HOURS_PER_DAY: u32 = 24;

/// Default date range (June 2024)
pub const DEFAULT_START_DATE: &str = "2024-06-01";
pub const DEFAULT_END_DATE: &str = "2024-06-30";

/// Timestamp selection
pub const DEFAULT_SELECTION_HOUR: u32 = 12;
pub const DEFAULT_FALLBACK_STRIDE: usize = 24;

/// Output defaults
pub const DEFAULT_FRAMES_DIR: &str = "aqi_frames";
pub const DEFAULT_ANIMATION_FILE: &str = "delhi_aqi_animation.gif";
pub const FRAME_FILE_PREFIX: &str = "aqi_frame_";
pub const FRAME_FILE_EXTENSION: &str = "png";
pub const DEFAULT_FPS: u32 = 5;
/// GIF delays are centiseconds; above this the per-frame delay degrades
pub const MAX_FPS: u32 = 50;
pub const DEFAULT_FRAME_WIDTH: u32 = 1000;
pub const DEFAULT_FRAME_HEIGHT: u32 = 1000;

/// Frame styling
pub const MARKER_RADIUS: i32 = 10;
pub const MARKER_OPACITY: f64 = 0.8;
pub const LABEL_OFFSET_DEGREES: f64 = 0.01;
pub const LABEL_FONT_SIZE: u32 = 14;
pub const TITLE_FONT_SIZE: u32 = 28;
/// Axis label counts giving 0.1 degree steps across the map window
pub const MAP_X_LABELS: usize = 9;
pub const MAP_Y_LABELS: usize = 6;
pub const COLORBAR_WIDTH: u32 = 200;
pub const TITLE_PREFIX: &str = "Delhi AQI";
pub const COLORBAR_CAPTION: &str = "Air Quality Index (AQI)";

/// Export formats
pub const FORMAT_CSV: &str = "csv";
pub const FORMAT_JSON: &str = "json";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "AQI";
