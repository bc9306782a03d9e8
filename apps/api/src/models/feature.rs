use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::GatewayFailure;

/// Whether a feature's text came from the model or from its offline generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    Live,
    Offline,
}

/// What every text feature returns. Never an error: degraded mode is a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureResponse {
    pub content: String,
    pub mode: ContentMode,
    /// Set when a live call was attempted and failed, for a transient UI notice.
    pub notice: Option<String>,
}

impl FeatureResponse {
    pub fn live(content: String) -> Self {
        Self {
            content,
            mode: ContentMode::Live,
            notice: None,
        }
    }

    pub fn offline(content: String, notice: Option<String>) -> Self {
        Self {
            content,
            mode: ContentMode::Offline,
            notice,
        }
    }

    /// Branches on the gateway outcome: live text passes through, any failure
    /// runs the feature's offline generator.
    pub fn from_gateway(
        feature: &str,
        result: Result<String, GatewayFailure>,
        offline: impl FnOnce() -> String,
    ) -> Self {
        match result {
            Ok(text) => Self::live(text),
            Err(failure) => {
                let notice = fallback_notice(feature, &failure);
                Self::offline(offline(), notice)
            }
        }
    }
}

/// Logs the fallback and returns a user-facing notice for failed live calls.
/// An unconfigured gateway is the expected offline mode and gets no notice.
pub fn fallback_notice(feature: &str, failure: &GatewayFailure) -> Option<String> {
    match failure {
        GatewayFailure::Unavailable(reason) => {
            info!("{feature}: serving offline content ({reason})");
            None
        }
        GatewayFailure::CallFailed(e) => {
            warn!("{feature}: LLM call failed, serving offline content: {e}");
            Some(format!("LLM request failed: {e}"))
        }
    }
}
