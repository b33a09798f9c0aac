#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8080"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const LANDING_STATS_PATH: &str = "/api/stats/landing";

/// How long the callback page shows its message before moving on, in ms.
pub const CALLBACK_REDIRECT_DELAY_MS: u32 = 800;

pub fn landing_stats_url() -> String {
    format!("{}{}", get_backend_url(), LANDING_STATS_PATH)
}
