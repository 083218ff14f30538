//! Anthropic messages API client.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::http::{check_response, non_empty};
use crate::prompts::DESCRIBE_PORTRAIT;
use crate::provider::{Credentials, ImageDescription, ImageInput, TextProvider, TextRequest};

const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnthropicClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    async fn send(
        &self,
        body: &MessagesRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let url = format!("{}/messages", self.base_url);
        let resp = check_response(
            self.http
                .post(&url)
                .header("x-api-key", &credentials.token)
                .header("anthropic-version", API_VERSION)
                .json(body)
                .send()
                .await?,
        )
        .await?;
        let data: MessagesResponse = resp.json().await?;
        tracing::debug!(model = body.model, "anthropic message received");
        non_empty(
            data.content
                .into_iter()
                .find(|block| block.kind == "text")
                .and_then(|block| block.text),
            "Anthropic",
        )
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: Vec<Block>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    Image { source: ImageSource },
}

#[derive(Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: String,
    data: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[async_trait]
impl TextProvider for AnthropicClient {
    async fn generate_text(
        &self,
        request: &TextRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let messages = request
            .conversation()
            .into_iter()
            .map(|turn| Message {
                role: turn.role.as_str(),
                content: vec![Block::Text { text: turn.content }],
            })
            .collect();
        let body = MessagesRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages,
        };
        self.send(&body, credentials).await
    }

    async fn describe_image(
        &self,
        image: &ImageInput<'_>,
        model: &str,
        max_tokens: u32,
        credentials: &Credentials,
    ) -> Result<ImageDescription, OracleError> {
        let body = MessagesRequest {
            model,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: vec![
                    Block::Image {
                        source: ImageSource {
                            kind: "base64",
                            media_type: image.media_type.to_string(),
                            data: base64::engine::general_purpose::STANDARD.encode(image.bytes),
                        },
                    },
                    Block::Text {
                        text: DESCRIBE_PORTRAIT.to_string(),
                    },
                ],
            }],
        };
        let text = self.send(&body, credentials).await?;
        Ok(ImageDescription {
            text,
            prompt: DESCRIBE_PORTRAIT.to_string(),
        })
    }

    fn name(&self) -> &str {
        "Anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_block_serializes_base64_source() {
        let block = Block::Image {
            source: ImageSource {
                kind: "base64",
                media_type: "image/jpeg".into(),
                data: "AAAA".into(),
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["source"]["type"], "base64");
        assert_eq!(json["source"]["media_type"], "image/jpeg");
    }

    #[test]
    fn parse_picks_first_text_block() {
        let data: MessagesResponse = serde_json::from_str(
            r#"{"id":"msg_1","content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"NO"}]}"#,
        )
        .unwrap();
        let text = data
            .content
            .into_iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text);
        assert_eq!(text.as_deref(), Some("NO"));
    }
}
