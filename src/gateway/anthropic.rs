//! Card gateway backed by the Anthropic Messages API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::prompt::{clean_translation, generation_prompt, parse_cards, translation_prompt};
use super::{CardGateway, GatewayError, Result};
use crate::config::GatewayConfig;
use crate::flashcards::{Card, GenerationRequest, LanguagePair};

/// Request body for the Messages API
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

pub struct AnthropicGateway {
    client: Client,
    config: GatewayConfig,
}

impl AnthropicGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        if config.api_key.is_empty() {
            log::warn!("No API key configured; AI generation and translation will fail");
        }

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.api_url.trim_end_matches('/'))
    }

    /// Send a single user message and return the first text block of the reply
    async fn complete(&self, prompt: &str, max_tokens: u32, timeout: Duration) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let body = build_request(&self.config.model, max_tokens, prompt);

        let response = self
            .client
            .post(self.messages_url())
            .timeout(timeout)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, message));
        }

        let raw = response.text().await?;
        extract_text(&raw)
    }
}

fn build_request<'a>(model: &'a str, max_tokens: u32, prompt: &'a str) -> MessagesRequest<'a> {
    MessagesRequest {
        model,
        max_tokens,
        messages: vec![ApiMessage {
            role: "user",
            content: prompt,
        }],
    }
}

fn upstream_error(status: StatusCode, message: String) -> GatewayError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        log::error!("Upstream rejected the API key ({})", status);
    }
    GatewayError::Upstream {
        status: status.as_u16(),
        message,
    }
}

/// Pull the first text block out of a Messages API response body
fn extract_text(raw: &str) -> Result<String> {
    let parsed: MessagesResponse = serde_json::from_str(raw)
        .map_err(|e| GatewayError::MalformedResponse(format!("unreadable reply: {}", e)))?;

    parsed
        .content
        .into_iter()
        .find_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Other => None,
        })
        .ok_or_else(|| GatewayError::MalformedResponse("reply has no text block".to_string()))
}

#[async_trait]
impl CardGateway for AnthropicGateway {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate_batch(&self, request: &GenerationRequest) -> Result<Vec<Card>> {
        log::info!(
            "Requesting {} cards on '{}' ({}) from {}",
            request.count,
            request.topic,
            request.language_pair,
            self.config.model
        );

        let prompt = generation_prompt(request);
        let text = self
            .complete(
                &prompt,
                self.config.generation_max_tokens,
                Duration::from_secs(self.config.generation_timeout_secs),
            )
            .await?;

        parse_cards(&text, request.count as usize)
    }

    async fn translate_one(&self, word: &str, pair: LanguagePair) -> Result<String> {
        log::info!("Translating '{}' ({})", word, pair);

        let prompt = translation_prompt(word, pair);
        let text = self
            .complete(
                &prompt,
                self.config.translation_max_tokens,
                Duration::from_secs(self.config.translation_timeout_secs),
            )
            .await?;

        clean_translation(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = build_request("claude-test", 200, "Переведи");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "claude-test");
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Переведи");
    }

    #[test]
    fn test_extract_text_skips_non_text_blocks() {
        let raw = r#"{
            "id": "msg_1",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "dog"}
            ]
        }"#;
        assert_eq!(extract_text(raw).unwrap(), "dog");
    }

    #[test]
    fn test_extract_text_errors() {
        assert!(matches!(
            extract_text(r#"{"content": []}"#),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_text("<html>bad gateway</html>"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_error_status_keeps_code_and_body() {
        let err = upstream_error(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string());
        assert!(matches!(
            err,
            GatewayError::Upstream { status: 429, ref message } if message == "slow down"
        ));

        let err = upstream_error(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, GatewayError::Upstream { status: 401, .. }));
    }

    #[test]
    fn test_gateway_name() {
        let gateway = AnthropicGateway::new(GatewayConfig::default()).unwrap();
        assert_eq!(gateway.name(), "anthropic");
    }

    #[test]
    fn test_messages_url_ignores_trailing_slash() {
        let config = GatewayConfig {
            api_url: "http://localhost:5000/".to_string(),
            ..GatewayConfig::default()
        };
        let gateway = AnthropicGateway::new(config).unwrap();
        assert_eq!(gateway.messages_url(), "http://localhost:5000/v1/messages");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let config = GatewayConfig {
            api_key: String::new(),
            api_url: "http://127.0.0.1:9".to_string(),
            ..GatewayConfig::default()
        };
        let gateway = AnthropicGateway::new(config).unwrap();

        let err = gateway.translate_one("dog", LanguagePair::EnRu).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey));
    }
}
