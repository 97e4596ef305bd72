/// Local storage key that holds the persisted display mode.
pub const THEME_STORAGE_KEY: &str = "aquacortex-theme";

/// How long the inquiry form shows its thank-you state.
pub const INQUIRY_ACK_MS: u32 = 5_000;

/// How long the footer newsletter widget shows "Subscribed".
pub const NEWSLETTER_ACK_MS: u32 = 3_000;

pub const SUPPORT_EMAIL: &str = "support@aquacortex.ai";
pub const SUPPORT_PHONE: &str = "+1 (234) 567-890";
pub const SUPPORT_PHONE_HREF: &str = "tel:+1234567890";
pub const HEADQUARTERS: &str = "Dubai, UAE";

pub fn get_theme_storage_key() -> &'static str {
    option_env!("AQUACORTEX_THEME_KEY").unwrap_or(THEME_STORAGE_KEY)
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
