//! OpenAI-compatible chat completions client.
//!
//! Serves both OpenAI and DeepSeek; they share the request and response shape
//! and differ only in base URL and vision support.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::http::{check_response, non_empty};
use crate::prompts::DESCRIBE_PORTRAIT;
use crate::provider::{Credentials, ImageDescription, ImageInput, TextProvider, TextRequest};

pub struct OpenAiClient {
    http: reqwest::Client,
    name: &'static str,
    base_url: String,
    vision: bool,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        name: &'static str,
        base_url: String,
        vision: bool,
    ) -> Self {
        Self {
            http,
            name,
            base_url,
            vision,
        }
    }

    async fn complete(
        &self,
        body: &ChatRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let url = format!("{}/chat/completions", self.base_url);
        let resp = check_response(
            self.http
                .post(&url)
                .bearer_auth(&credentials.token)
                .json(body)
                .send()
                .await?,
        )
        .await?;
        let data: ChatResponse = resp.json().await?;
        tracing::debug!(provider = self.name, model = body.model, "completion received");
        non_empty(
            data.choices.into_iter().next().and_then(|c| c.message.content),
            self.name,
        )
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl TextProvider for OpenAiClient {
    async fn generate_text(
        &self,
        request: &TextRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let messages = request
            .conversation()
            .into_iter()
            .map(|turn| ChatMessage {
                role: turn.role.as_str(),
                content: MessageContent::Text(turn.content),
            })
            .collect();
        let body = ChatRequest {
            model: request.model,
            messages,
            max_tokens: request.max_tokens,
        };
        self.complete(&body, credentials).await
    }

    async fn describe_image(
        &self,
        image: &ImageInput<'_>,
        model: &str,
        max_tokens: u32,
        credentials: &Credentials,
    ) -> Result<ImageDescription, OracleError> {
        if !self.vision {
            return Err(OracleError::UnsupportedCapability {
                provider: self.name.to_string(),
                capability: "image description",
            });
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(image.bytes);
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: DESCRIBE_PORTRAIT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:{};base64,{encoded}", image.media_type),
                            detail: "high",
                        },
                    },
                ]),
            }],
            max_tokens,
        };
        let text = self.complete(&body, credentials).await?;
        Ok(ImageDescription {
            text,
            prompt: DESCRIBE_PORTRAIT.to_string(),
        })
    }

    fn name(&self) -> &str {
        self.name
    }
}
