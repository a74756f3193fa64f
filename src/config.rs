use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// localStorage key holding the JSON array of subscriber emails.
pub const SUBSCRIBERS_KEY: &str = "maisiesClosetSubscribers";

// Navigation
pub const NAV_SCROLL_MARGIN: f64 = 20.0;

// Notifications
pub const NOTIFICATION_HOLD_MS: u32 = 4_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// Sparkles
pub const SPARKLE_CHANCE: f64 = 0.1;
pub const SPARKLE_LIFETIME_MS: u32 = 1_500;

// Fade-in
pub const FADE_SELECTOR: &str = ".feature, .about__text p";
pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;
