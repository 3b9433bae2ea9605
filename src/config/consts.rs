// src/config/consts.rs

// Tables
pub const DEFAULT_TABLE_CLASS: &str = "wikitable";

// Display marker for a row too short to have the requested column.
// Empty by default so copied columns line up with the source rows.
pub const DEFAULT_MISSING: &str = "";
pub const GUI_MISSING: &str = "—";

// Input
pub const STDIN_SOURCE: &str = "-";

// Logging
pub const LOG_ENV: &str = "WIKI_SCRAPE_LOG";
pub const LOG_FILE: &str = "wiki_scrape.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
