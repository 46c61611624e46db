//! Per-client-IP rate limiting.
//!
//! Each route tier gets its own token bucket layer allowing `n` requests per minute with
//! a burst of `n`. Clients are keyed by the peer address of the connection. Forwarding
//! headers are only honoured when the server is configured to sit behind a trusted
//! proxy, since any client can set them. Requests whose address cannot be determined
//! share one bucket.

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use axum::{http::Request, routing::MethodRouter};
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
    GovernorError, GovernorLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Requests per minute for each route tier.
pub mod tier {
    pub const REGISTER: u32 = 3;
    pub const LOGIN: u32 = 5;
    pub const ACCOUNT_WRITE: u32 = 3;
    pub const CREATE: u32 = 3;
    pub const WRITE: u32 = 5;
    pub const READ: u32 = 10;
    pub const ROLL: u32 = 30;
    pub const ME: u32 = 30;
}

/// Router-wide rate limit settings.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub enabled: bool,
    /// Key on `X-Forwarded-For`, `X-Real-IP` or `Forwarded` before the peer address.
    pub trust_proxy_headers: bool,
}

impl RateLimit {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.rate_limit_enabled,
            trust_proxy_headers: config.trust_proxy_headers,
        }
    }
}

/// Keys requests by client IP, falling back to a shared key.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    pub fn new(trust_proxy_headers: bool) -> Self {
        Self {
            trust_proxy_headers,
        }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let ip = if self.trust_proxy_headers {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        };

        Ok(ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)))
    }
}

/// Wraps a method router in a bucket allowing `per_minute` requests per client.
///
/// Returns the route unchanged when limiting is disabled.
///
/// # Returns
/// - `Err(ConfigError::InvalidRateLimit)` - `per_minute` is zero or above 60 000
pub fn limit(
    route: MethodRouter<AppState>,
    per_minute: u32,
    settings: RateLimit,
) -> Result<MethodRouter<AppState>, AppError> {
    if !settings.enabled {
        return Ok(route);
    }

    let period_ms = 60_000u64
        .checked_div(per_minute as u64)
        .filter(|ms| *ms > 0)
        .ok_or(ConfigError::InvalidRateLimit(per_minute))?;

    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor::new(settings.trust_proxy_headers))
        .per_millisecond(period_ms)
        .burst_size(per_minute)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit(per_minute))?;

    Ok(route.layer(GovernorLayer::new(Arc::new(config))))
}
