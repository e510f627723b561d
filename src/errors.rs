use thiserror::Error;

/// Top-level application error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Tool provider errors ─────────────────────────────────────────────────
    #[error("{provider} is not available: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid value '{value}' for {key} (expected {expected})")]
    InvalidConfig {
        key: String,
        value: String,
        expected: String,
    },
}

#[allow(dead_code)]
impl AppError {
    pub fn provider_unavailable(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::ProviderUnavailable { provider: provider.into(), reason: reason.into() }
    }

    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        AppError::InvalidConfig { key: key.into(), value: value.into(), expected: expected.into() }
    }

    pub fn is_provider_unavailable(&self) -> bool {
        matches!(self, AppError::ProviderUnavailable { .. })
    }
}
