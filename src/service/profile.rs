use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

pub const STAGE_RECEIVED: &str = "Received message";
pub const STAGE_SENDING: &str = "Sending response";

/// The tool reported in `tools_used` whenever a chat turn opts into tools.
pub const DEMO_TOOL: &str = "composio_demo";

/// Integration names grouped by category, shared by the status report and
/// the static tool catalog.
pub const INTEGRATION_GROUPS: &[(&str, &[&str])] = &[
    ("communication", &["GMAIL_SEND_EMAIL", "SLACK_SEND_MESSAGE"]),
    ("development", &["GITHUB_CREATE_ISSUE"]),
    ("productivity", &["NOTION_CREATE_PAGE"]),
    ("search", &["TAVILY_SEARCH"]),
];

/// Which revision of the chat contract the service speaks.
///
/// Every profile answers with the same shapes; they differ only in the reply
/// template, the narrated stages, the placeholder token count and the static
/// data echoed by `/` and `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseProfile {
    Echo,
    #[default]
    Composio,
    ComposioReady,
}

impl ResponseProfile {
    #[cfg(test)]
    pub const ALL: [ResponseProfile; 3] =
        [ResponseProfile::Echo, ResponseProfile::Composio, ResponseProfile::ComposioReady];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseProfile::Echo => "echo",
            ResponseProfile::Composio => "composio",
            ResponseProfile::ComposioReady => "composio-ready",
        }
    }

    pub fn render_reply(&self, content: &str) -> String {
        match self {
            ResponseProfile::Echo => format!("Echo: {content}"),
            ResponseProfile::Composio => format!("Processed with Composio support: {content}"),
            ResponseProfile::ComposioReady => format!("✅ Composio Ready | Processed: {content}"),
        }
    }

    /// Placeholder, not a measurement.
    pub fn tokens_used(&self) -> u32 {
        match self {
            ResponseProfile::Echo => 100,
            ResponseProfile::Composio | ResponseProfile::ComposioReady => 150,
        }
    }

    /// Stages between "Received message" and "Sending response".
    fn middle_stages(&self) -> &'static [&'static str] {
        match self {
            ResponseProfile::Echo => &["Processing"],
            ResponseProfile::Composio => &["Processing with LangGraph"],
            ResponseProfile::ComposioReady => &["Analyzing request", "Processing with LangGraph"],
        }
    }

    fn tool_stage(&self) -> &'static str {
        match self {
            ResponseProfile::Echo | ResponseProfile::Composio => "Checked for tool usage",
            ResponseProfile::ComposioReady => "Routing through Composio integrations",
        }
    }

    /// Narrated pipeline for one chat turn. The tool stage, when used, goes
    /// right after the first stage so the list still ends with "Sending response".
    pub fn thought_process(&self, used_tools: bool) -> Vec<String> {
        let mut stages = vec![STAGE_RECEIVED.to_string()];
        if used_tools {
            stages.push(self.tool_stage().to_string());
        }
        stages.extend(self.middle_stages().iter().map(|s| s.to_string()));
        stages.push(STAGE_SENDING.to_string());
        stages
    }

    pub fn default_tools_enabled(&self) -> bool {
        !matches!(self, ResponseProfile::Echo)
    }

    pub fn service_status(&self) -> &'static str {
        match self {
            ResponseProfile::Echo => "LangGraph Agent is running",
            ResponseProfile::Composio => "LangGraph Agent with Composio is running",
            ResponseProfile::ComposioReady => "LangGraph Agent with Composio is ready",
        }
    }

    pub fn version(&self) -> &'static str {
        match self {
            ResponseProfile::Echo => "1.0.0",
            ResponseProfile::Composio => "2.0.0",
            ResponseProfile::ComposioReady => "3.0.0",
        }
    }

    pub fn features(&self) -> Vec<&'static str> {
        match self {
            ResponseProfile::Echo => vec!["LangGraph", "LiteLLM"],
            ResponseProfile::Composio => vec!["LangGraph", "Composio", "LiteLLM"],
            ResponseProfile::ComposioReady => {
                vec!["LangGraph", "Composio", "LiteLLM", "Tool Categories"]
            }
        }
    }

    /// Integration categories advertised on the status report; only the
    /// latest revision publishes them.
    pub fn integrations(&self) -> Option<BTreeMap<&'static str, Vec<&'static str>>> {
        match self {
            ResponseProfile::ComposioReady => Some(
                INTEGRATION_GROUPS
                    .iter()
                    .map(|(category, tools)| (*category, tools.to_vec()))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn health_extra(&self) -> Option<&'static str> {
        match self {
            ResponseProfile::ComposioReady => Some("ready"),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "echo" => Ok(ResponseProfile::Echo),
            "composio" => Ok(ResponseProfile::Composio),
            "composio-ready" => Ok(ResponseProfile::ComposioReady),
            _ => Err(AppError::invalid_config(
                "RESPONSE_PROFILE",
                s,
                "echo, composio or composio-ready",
            )),
        }
    }
}
