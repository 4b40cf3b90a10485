//! Generative-content collaborator: materializes a block from a category,
//! an intent description, and a style.
//!
//! The store is deliberately ignorant of this module. Callers await
//! [`ContentProvider::materialize`] themselves, then feed the successful
//! triple into `StudioStore::add_artifact` and report the outcome through
//! `StudioStore::log` / `StudioStore::record_traffic`. Retries, timeouts,
//! and fallbacks all live on this side of the boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

const GATEWAY_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";
const ENV_GATEWAY_KEY: &str = "ATELIER_GATEWAY_API_KEY";

/// System prompt framing every materialization request.
const MATERIALIZER_SYSTEM_PROMPT: &str = "\
You are an industrial-grade UI block compiler. Synthesize production-ready \
HTML/Tailwind snippets.\n\
[STYLE GUIDELINES]\n\
- Layout: 24-column grid (grid-cols-24).\n\
- Aesthetics: rounded-[3rem], bold italic uppercase headers, high tracking.\n\
- Colors: Teal (#14b8a6), Slate-950, Emerald-500, Indigo-500.\n\
- Quality: accessible, mobile-responsive.\n\
[OUTPUT]\n\
Return ONLY a JSON object with fields \"name\" (short uppercase node name), \
\"markup\" (the complete HTML/Tailwind string, using class= not className), \
and \"description\" (one sentence).";

/// The name/markup/description triple a provider returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBlock {
    pub name: String,
    #[serde(alias = "code")]
    pub markup: String,
    pub description: String,
}

impl GeneratedBlock {
    /// Placeholder block surfaced when a completion cannot be parsed.
    pub fn corrupt() -> Self {
        Self {
            name: "CORRUPT_NODE".to_string(),
            markup: "<div class=\"p-10 bg-red-500 text-white font-black\">GENERATION_ERROR</div>"
                .to_string(),
            description: "Failed to generate node.".to_string(),
        }
    }
}

/// Visual style requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStyle {
    IndustrialUltra,
    MagicUi,
    MinimalShadcn,
    CloudOps,
}

impl GenerationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStyle::IndustrialUltra => "industrial-ultra",
            GenerationStyle::MagicUi => "magic-ui",
            GenerationStyle::MinimalShadcn => "minimal-shadcn",
            GenerationStyle::CloudOps => "cloud-ops",
        }
    }
}

/// Failures a provider can report. The store never sees these; callers
/// decide what to log and whether to fall back.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no gateway API key configured")]
    NotConfigured,

    #[error("gateway request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("unusable gateway response: {reason}")]
    InvalidResponse { reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Contract consumed by the canvas: one async call, one triple or one error.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn materialize(
        &self,
        category: &str,
        intent: &str,
        style: GenerationStyle,
    ) -> Result<GeneratedBlock, ProviderError>;
}

// OpenAI-compatible request/response shapes.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Bridge to an OpenAI-compatible completions gateway.
///
/// API key comes from `ATELIER_GATEWAY_API_KEY`. An unparsable completion
/// degrades to [`GeneratedBlock::corrupt`] rather than an error, so a flaky
/// model never blocks the canvas.
pub struct GatewayBridge {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GatewayBridge {
    /// Creates a bridge from the environment; `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(ENV_GATEWAY_KEY).ok()?.trim().to_string();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key))
    }

    /// Creates a bridge with an explicit API key.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Overrides the completion model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

#[async_trait]
impl ContentProvider for GatewayBridge {
    async fn materialize(
        &self,
        category: &str,
        intent: &str,
        style: GenerationStyle,
    ) -> Result<GeneratedBlock, ProviderError> {
        let user_text = format!(
            "MATERIALIZE_NODE: {}\nINTENT: {}\nSTYLE: {}\n\nOutput valid HTML with Tailwind classes only.",
            category,
            intent,
            style.as_str()
        );
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MATERIALIZER_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_text,
                },
            ],
            temperature: Some(0.7),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", GATEWAY_API_BASE))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Request {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse {
                reason: e.to_string(),
            })?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ProviderError::InvalidResponse {
                reason: "empty choices".to_string(),
            })?;

        Ok(extract_block_json(content).unwrap_or_else(|| {
            warn!(category, "completion was not a parsable block; degrading to placeholder");
            GeneratedBlock::corrupt()
        }))
    }
}

/// Pulls the JSON triple out of a completion, tolerating code fences and
/// surrounding prose.
fn extract_block_json(content: &str) -> Option<GeneratedBlock> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&content[start..=end]).ok()
}

/// Deterministic offline provider for tests and demos: echoes the request
/// back as a plain styled section.
pub struct StaticProvider;

#[async_trait]
impl ContentProvider for StaticProvider {
    async fn materialize(
        &self,
        category: &str,
        intent: &str,
        style: GenerationStyle,
    ) -> Result<GeneratedBlock, ProviderError> {
        Ok(GeneratedBlock {
            name: format!("{}_DRAFT", category.to_uppercase()),
            markup: format!(
                "<section class=\"p-10 bg-slate-950 rounded-[3rem]\" data-style=\"{}\">{}</section>",
                style.as_str(),
                intent
            ),
            description: intent.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_block_json_plain() {
        let block = extract_block_json(
            r#"{"name":"HERO_ALPHA","markup":"<section></section>","description":"A hero."}"#,
        )
        .unwrap();
        assert_eq!(block.name, "HERO_ALPHA");
        assert_eq!(block.markup, "<section></section>");
    }

    #[test]
    fn test_extract_block_json_fenced_with_code_alias() {
        let content = "```json\n{\"name\":\"CTA_ONE\",\"code\":\"<div></div>\",\"description\":\"cta\"}\n```";
        let block = extract_block_json(content).unwrap();
        assert_eq!(block.name, "CTA_ONE");
        // The original schema called this field `code`; the alias keeps old
        // completions parsable.
        assert_eq!(block.markup, "<div></div>");
    }

    #[test]
    fn test_extract_block_json_garbage() {
        assert!(extract_block_json("no json here").is_none());
        assert!(extract_block_json("} backwards {").is_none());
        assert!(extract_block_json("{\"name\": 42}").is_none());
    }

    #[test]
    fn test_corrupt_placeholder() {
        let block = GeneratedBlock::corrupt();
        assert_eq!(block.name, "CORRUPT_NODE");
        assert!(block.markup.contains("GENERATION_ERROR"));
    }

    #[test]
    fn test_style_spellings() {
        assert_eq!(GenerationStyle::IndustrialUltra.as_str(), "industrial-ultra");
        assert_eq!(
            serde_json::to_string(&GenerationStyle::CloudOps).unwrap(),
            "\"cloud-ops\""
        );
    }

    #[test]
    fn test_from_env_requires_key() {
        // Not set in the test environment.
        std::env::remove_var(ENV_GATEWAY_KEY);
        assert!(GatewayBridge::from_env().is_none());
    }

    #[tokio::test]
    async fn test_static_provider_materializes() {
        let provider = StaticProvider;
        let block = provider
            .materialize("Hero", "dark landing section", GenerationStyle::MagicUi)
            .await
            .unwrap();
        assert_eq!(block.name, "HERO_DRAFT");
        assert!(block.markup.contains("magic-ui"));
        assert!(block.markup.contains("dark landing section"));
    }
}
