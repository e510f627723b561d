use tracing::debug;

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse, HealthReport, StatusReport, ToolListing};
use crate::service::profile::{ResponseProfile, DEMO_TOOL};
use crate::tools::SharedToolProvider;

const SERVICE_NAME: &str = "agent-contract-api";
const HEALTHY: &str = "healthy";

/// Request/response contract behind every route.
///
/// Holds only immutable configuration, so one instance is cloned into each
/// handler and requests never share mutable state.
#[derive(Clone)]
pub struct ContractService {
    profile: ResponseProfile,
    tools_enabled: bool,
    tool_provider: SharedToolProvider,
}

impl ContractService {
    pub fn new(
        profile: ResponseProfile,
        tools_enabled: bool,
        tool_provider: SharedToolProvider,
    ) -> Self {
        Self { profile, tools_enabled, tool_provider }
    }

    pub fn tools_enabled(&self) -> bool {
        self.tools_enabled
    }

    pub fn status(&self) -> StatusReport {
        let integrations = self.profile.integrations();
        StatusReport {
            status: self.profile.service_status(),
            version: self.profile.version(),
            features: self.profile.features(),
            total_integrations: integrations
                .as_ref()
                .map(|groups| groups.values().map(Vec::len).sum()),
            integrations,
        }
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: HEALTHY,
            service: SERVICE_NAME,
            composio: self.profile.health_extra(),
        }
    }

    pub fn list_tools(&self) -> Result<ToolListing, AppError> {
        self.tool_provider.catalog()
    }

    pub fn chat(&self, request: &ChatRequest) -> ChatResponse {
        let used_tools = self.tools_enabled && request.wants_tools();

        debug!(
            messages = request.messages.len(),
            user_id = request.user_id(),
            model = request.model(),
            used_tools,
            "Assembling chat response"
        );

        let tools_used = self.tools_enabled.then(|| {
            if used_tools {
                vec![DEMO_TOOL.to_string()]
            } else {
                Vec::new()
            }
        });

        ChatResponse {
            response: self.profile.render_reply(request.last_content()),
            thought_process: self.profile.thought_process(used_tools),
            tokens_used: self.profile.tokens_used(),
            tools_used,
        }
    }
}
