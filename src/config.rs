use crate::errors::AppError;
use crate::service::profile::ResponseProfile;
use crate::tools::ToolProviderKind;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime settings, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub profile: ResponseProfile,
    pub tools_enabled: bool,
    pub tool_provider: ToolProviderKind,
    pub composio_api_key: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("profile", &self.profile)
            .field("tools_enabled", &self.tools_enabled)
            .field("tool_provider", &self.tool_provider)
            .field("composio_api_key", &self.composio_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing can be exercised
    /// without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let profile = match lookup("RESPONSE_PROFILE") {
            Some(raw) => raw.parse()?,
            None => ResponseProfile::default(),
        };

        let tools_enabled = match lookup("TOOLS_ENABLED") {
            Some(raw) => parse_flag("TOOLS_ENABLED", &raw)?,
            None => profile.default_tools_enabled(),
        };

        let tool_provider = match lookup("TOOL_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => ToolProviderKind::default(),
        };

        Ok(Self {
            host,
            port,
            profile,
            tools_enabled,
            tool_provider,
            composio_api_key: lookup("COMPOSIO_API_KEY"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::invalid_config(key, raw, "true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.profile, ResponseProfile::Composio);
        assert!(cfg.tools_enabled);
        assert_eq!(cfg.tool_provider, ToolProviderKind::Composio);
        assert_eq!(cfg.composio_api_key, None);
    }

    #[test]
    fn echo_profile_disables_tools_by_default() {
        let cfg = config(&[("RESPONSE_PROFILE", "echo")]).unwrap();
        assert!(!cfg.tools_enabled);

        let cfg = config(&[("RESPONSE_PROFILE", "echo"), ("TOOLS_ENABLED", "yes")]).unwrap();
        assert!(cfg.tools_enabled);
    }

    #[test]
    fn unparsable_port_falls_back() {
        let cfg = config(&[("PORT", "eighty")]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        let cfg = config(&[("PORT", "9090"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("RESPONSE_PROFILE", "v4")]).is_err());
        assert!(config(&[("TOOLS_ENABLED", "sometimes")]).is_err());
        assert!(config(&[("TOOL_PROVIDER", "zapier")]).is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = config(&[("COMPOSIO_API_KEY", "ck_live_123")]).unwrap();
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("ck_live_123"));
        assert!(shown.contains("<redacted>"));
    }
}
