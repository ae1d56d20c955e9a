//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so settings are captured
//! from the build environment with `option_env!`:
//! - `WT_API_BASE_URL`: REST API origin, default same origin (`""`)
//! - `WT_EXPIRY_WINDOW_DAYS`: "expiring soon" window, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: &'static str,
    pub expiry_window_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("WT_API_BASE_URL"), option_env!("WT_EXPIRY_WINDOW_DAYS"))
    }

    #[must_use]
    pub fn from_values(api_base_url: Option<&'static str>, expiry_window_days: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.unwrap_or_default().trim().trim_end_matches('/'),
            expiry_window_days: parse_days(expiry_window_days, DEFAULT_EXPIRY_WINDOW_DAYS),
        }
    }
}

fn parse_days(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|days| *days > 0)
        .unwrap_or(default)
}
