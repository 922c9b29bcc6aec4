use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Raw site content, embedded at build time.
pub const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");

/// Milliseconds between two frames of the scramble-to-resolve text effect.
pub const SCRAMBLE_TICK_MS: u32 = 40;

/// Characters the cursor advances per scramble tick.
pub const SCRAMBLE_STEP: f64 = 0.5;

/// Vertical scroll offset after which the navbar switches to its compact form.
pub const NAV_COMPACT_AFTER_PX: f64 = 50.0;
