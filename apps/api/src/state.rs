use chrono::Duration;

use crate::config::Config;
use crate::interview::store::SessionStore;
use crate::llm_client::Gateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// LLM availability, fixed at startup. Features fall back offline when unavailable.
    pub gateway: Gateway,
    pub config: Config,
    /// Mock interview sessions, in memory only, expiring after `SESSION_TTL_SECS`.
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, gateway: Gateway) -> Self {
        Self {
            sessions: SessionStore::new(Duration::seconds(config.session_ttl_secs)),
            gateway,
            config,
        }
    }
}
