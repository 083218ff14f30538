//! Ollama `/api/chat` client for locally hosted models.
//!
//! No token is needed; images travel as base64 strings on the user message.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::http::{check_response, non_empty};
use crate::prompts::DESCRIBE_PORTRAIT;
use crate::provider::{Credentials, ImageDescription, ImageInput, TextProvider, TextRequest};

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    async fn chat(&self, body: &ChatRequest<'_>) -> Result<String, OracleError> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = check_response(self.http.post(&url).json(body).send().await?).await?;
        let data: ChatResponse = resp.json().await?;
        tracing::debug!(model = body.model, "ollama chat received");
        non_empty(data.message.map(|m| m.content), "Ollama")
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: Options,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

#[derive(Serialize)]
struct Options {
    num_predict: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[async_trait]
impl TextProvider for OllamaClient {
    async fn generate_text(
        &self,
        request: &TextRequest<'_>,
        _credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let messages = request
            .conversation()
            .into_iter()
            .map(|turn| ChatMessage {
                role: turn.role.as_str(),
                content: turn.content,
                images: Vec::new(),
            })
            .collect();
        self.chat(&ChatRequest {
            model: request.model,
            messages,
            stream: false,
            options: Options {
                num_predict: request.max_tokens,
            },
        })
        .await
    }

    async fn describe_image(
        &self,
        image: &ImageInput<'_>,
        model: &str,
        max_tokens: u32,
        _credentials: &Credentials,
    ) -> Result<ImageDescription, OracleError> {
        let text = self
            .chat(&ChatRequest {
                model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: DESCRIBE_PORTRAIT.to_string(),
                    images: vec![base64::engine::general_purpose::STANDARD.encode(image.bytes)],
                }],
                stream: false,
                options: Options {
                    num_predict: max_tokens,
                },
            })
            .await?;
        Ok(ImageDescription {
            text,
            prompt: DESCRIBE_PORTRAIT.to_string(),
        })
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}
