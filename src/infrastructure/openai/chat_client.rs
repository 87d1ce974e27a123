use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AnalysisError, ChatBackend};

use super::backend_error::classify_backend_failure;

const VISION_SYSTEM_PROMPT: &str = "You are a vision assistant. Provide a detailed but \
                                    concise description of the image and notable details.";
const VISION_USER_PROMPT: &str = "Describe this image thoroughly.";
const VISION_TEMPERATURE: f32 = 0.4;

const TRANSCRIPT_SUMMARY_PROMPT: &str =
    "Summarize the transcript into 4-6 concise bullet points.";
const DOCUMENT_SUMMARY_PROMPT: &str =
    "Summarize the given text into clear bullet points. Keep it under 10 bullets.";
const SUMMARY_TEMPERATURE: f32 = 0.2;

pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
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
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    fn text_messages(system: &str, user: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(system.to_string()),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Text(user.to_string()),
            },
        ]
    }

    async fn complete(
        &self,
        temperature: f32,
        messages: Vec<ChatMessage>,
    ) -> Result<String, AnalysisError> {
        if self.api_key.is_empty() {
            return Err(AnalysisError::MissingCredential("OpenAI API key"));
        }

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            temperature,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalysisError::BackendError(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_backend_failure(status, &body));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::BackendError(format!("body: {e}")))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        tracing::debug!(chars = content.len(), model = %self.model, "Chat completion received");

        Ok(content)
    }
}

#[async_trait]
impl ChatBackend for OpenAiChatClient {
    #[tracing::instrument(skip(self, image_base64))]
    async fn describe_image(&self, image_base64: &str) -> Result<String, AnalysisError> {
        let messages = vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(VISION_SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: VISION_USER_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/*;base64,{image_base64}"),
                        },
                    },
                ]),
            },
        ];

        self.complete(VISION_TEMPERATURE, messages).await
    }

    #[tracing::instrument(skip(self, transcript))]
    async fn summarize_transcript(&self, transcript: &str) -> Result<String, AnalysisError> {
        let messages = Self::text_messages(TRANSCRIPT_SUMMARY_PROMPT, transcript);
        self.complete(SUMMARY_TEMPERATURE, messages).await
    }

    #[tracing::instrument(skip(self, text))]
    async fn summarize_document(&self, text: &str) -> Result<String, AnalysisError> {
        let messages = Self::text_messages(DOCUMENT_SUMMARY_PROMPT, text);
        self.complete(SUMMARY_TEMPERATURE, messages).await
    }
}
