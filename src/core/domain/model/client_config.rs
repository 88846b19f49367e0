//! Client-side settings: request throttling and timeouts.

use std::time::Duration;

/// Token-bucket settings for outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained request rate.
    pub requests_per_second: u32,
    /// Requests allowed in a burst before throttling kicks in.
    pub burst_size: u32,
}

/// Settings of the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `None` disables throttling.
    pub rate_limit: Option<RateLimitConfig>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}
