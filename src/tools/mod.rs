use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use crate::errors::AppError;
use crate::models::ToolListing;
use crate::service::profile::INTEGRATION_GROUPS;

const READY_STATUS: &str = "Composio initialized";

/// Source of the third-party integrations a chat turn may route through.
///
/// Providers only describe what is available; nothing here executes a tool.
pub trait ToolProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn catalog(&self) -> Result<ToolListing, AppError>;
}

pub type SharedToolProvider = Arc<dyn ToolProvider>;

fn integration_listing() -> ToolListing {
    ToolListing::from_groups(INTEGRATION_GROUPS.iter().copied(), READY_STATUS)
}

/// Built-in catalog that is always available.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl ToolProvider for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    fn catalog(&self) -> Result<ToolListing, AppError> {
        Ok(integration_listing())
    }
}

/// Composio-backed catalog. Usable only once an API key has been configured.
#[derive(Clone, Default)]
pub struct ComposioProbe {
    api_key: Option<String>,
}

impl ComposioProbe {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key: api_key.filter(|k| !k.trim().is_empty()) }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for ComposioProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposioProbe")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl ToolProvider for ComposioProbe {
    fn name(&self) -> &'static str {
        "composio"
    }

    fn catalog(&self) -> Result<ToolListing, AppError> {
        if !self.is_configured() {
            warn!("Composio tool catalog requested but COMPOSIO_API_KEY is not set");
            return Err(AppError::provider_unavailable("Composio", "COMPOSIO_API_KEY is not set"));
        }
        Ok(integration_listing())
    }
}

/// Which provider backs `/tools`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolProviderKind {
    Static,
    #[default]
    Composio,
}

impl ToolProviderKind {
    pub fn build(self, composio_api_key: Option<String>) -> SharedToolProvider {
        match self {
            ToolProviderKind::Static => Arc::new(StaticCatalog),
            ToolProviderKind::Composio => Arc::new(ComposioProbe::new(composio_api_key)),
        }
    }
}

impl FromStr for ToolProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(ToolProviderKind::Static),
            "composio" => Ok(ToolProviderKind::Composio),
            _ => Err(AppError::invalid_config("TOOL_PROVIDER", s, "static or composio")),
        }
    }
}
