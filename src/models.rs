use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_USER_ID: &str = "default";
/// Stands in for the last message's content when a conversation is empty.
pub const NO_MESSAGE: &str = "No message";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[allow(dead_code)]
impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

fn default_model() -> Option<String> {
    Some(DEFAULT_MODEL.to_string())
}

fn default_user_id() -> Option<String> {
    Some(DEFAULT_USER_ID.to_string())
}

fn default_use_tools() -> Option<bool> {
    Some(false)
}

/// Inbound conversation payload for `POST /chat`.
///
/// Absent optional fields take their defaults; an explicit `null` is kept as
/// `None` and treated like the default wherever the value is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_model")]
    pub model: Option<String>,
    #[serde(default = "default_user_id")]
    pub user_id: Option<String>,
    #[serde(default = "default_use_tools")]
    pub use_tools: Option<bool>,
}

#[allow(dead_code)]
impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: default_model(),
            user_id: default_user_id(),
            use_tools: default_use_tools(),
        }
    }

    pub fn with_tools(mut self, use_tools: bool) -> Self {
        self.use_tools = Some(use_tools);
        self
    }

    /// Content of the final message, or [`NO_MESSAGE`] for an empty conversation.
    pub fn last_content(&self) -> &str {
        self.messages.last().map_or(NO_MESSAGE, |m| m.content.as_str())
    }

    pub fn wants_tools(&self) -> bool {
        self.use_tools.unwrap_or(false)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub thought_process: Vec<String>,
    pub tokens_used: u32,
    /// Only serialized when the deployment has tool support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_used: Option<Vec<String>>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub version: &'static str,
    pub features: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<BTreeMap<&'static str, Vec<&'static str>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_integrations: Option<usize>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composio: Option<&'static str>,
}

/// Body of `GET /tools` when the provider is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolListing {
    pub available_tools: Vec<String>,
    pub categories: BTreeMap<String, Vec<String>>,
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
    pub status: String,
}

impl ToolListing {
    /// Builds a listing from `(category, tools)` groups, deriving the flat
    /// tool list and every count from the groups.
    pub fn from_groups<'a>(
        groups: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
        status: impl Into<String>,
    ) -> Self {
        let mut available_tools = Vec::new();
        let mut categories = BTreeMap::new();
        let mut counts = BTreeMap::new();

        for (category, tools) in groups {
            available_tools.extend(tools.iter().map(|t| t.to_string()));
            categories.insert(
                category.to_string(),
                tools.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            );
            counts.insert(category.to_string(), tools.len());
        }

        Self {
            total: available_tools.len(),
            available_tools,
            categories,
            counts,
            status: status.into(),
        }
    }
}

/// Body of `GET /tools` when the provider cannot be reached. Still sent with 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolsUnavailable {
    pub error: String,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_fills_defaults_for_missing_fields() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"user","content":"hello"}]}"#).unwrap();
        assert_eq!(req.model(), DEFAULT_MODEL);
        assert_eq!(req.user_id(), DEFAULT_USER_ID);
        assert!(!req.wants_tools());
        assert_eq!(req.last_content(), "hello");
    }

    #[test]
    fn explicit_nulls_behave_like_defaults() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"messages":[],"model":null,"user_id":null,"use_tools":null}"#,
        )
        .unwrap();
        assert_eq!(req.model, None);
        assert_eq!(req.model(), DEFAULT_MODEL);
        assert_eq!(req.user_id(), DEFAULT_USER_ID);
        assert!(!req.wants_tools());
    }

    #[test]
    fn empty_conversation_substitutes_sentinel() {
        let req = ChatRequest::new(vec![]);
        assert_eq!(req.last_content(), NO_MESSAGE);
    }

    #[test]
    fn last_content_takes_the_final_message() {
        let req = ChatRequest::new(vec![
            Message::new("system", "be brief"),
            Message::user("first"),
            Message::new("assistant", "ok"),
            Message::user("second"),
        ]);
        assert_eq!(req.last_content(), "second");
    }

    #[test]
    fn message_requires_both_fields() {
        let res = serde_json::from_str::<ChatRequest>(r#"{"messages":[{"role":"user"}]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn tools_used_is_omitted_when_none() {
        let resp = ChatResponse {
            response: "Echo: hi".into(),
            thought_process: vec![],
            tokens_used: 100,
            tools_used: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("tools_used").is_none());
    }

    #[test]
    fn listing_counts_follow_groups() {
        let listing = ToolListing::from_groups(
            [("search", &["TAVILY_SEARCH"][..]), ("development", &["GITHUB_CREATE_ISSUE"][..])],
            "ok",
        );
        assert_eq!(listing.total, 2);
        assert_eq!(listing.counts["search"], 1);
        assert_eq!(listing.available_tools, vec!["TAVILY_SEARCH", "GITHUB_CREATE_ISSUE"]);
    }
}
