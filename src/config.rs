/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend used when `SHOP_API_URL` is not set at build time
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";

    /// Trailing window requested by the history view
    pub const HISTORY_WINDOW_DAYS: u32 = 30;

    /// Delay before re-rendering the chart after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Revalidate cached queries when the browser window regains focus
    pub const REVALIDATE_ON_FOCUS: bool = true;

    /// Base URL of the REST backend, taken from the build environment.
    pub fn api_base_url() -> &'static str {
        option_env!("SHOP_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(Self::DEFAULT_API_URL)
    }
}
