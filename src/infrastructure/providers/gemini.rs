//! Google Gemini 모델 어댑터.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::application::error::ServiceError;
use crate::application::ports::ReviewModel;
use crate::domain::review::{ModelResponse, TokenUsage};
use crate::infrastructure::config::AppConfig;

use super::api_runner::{build_api_client, collect_text, send_json};

const ACTION: &str = "request Gemini API";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiModel {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
}

impl GeminiModel {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: build_api_client(),
            base_url: config.api_base.clone(),
            model: config.model.clone(),
            credential: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn extract_gemini_content(response: &Value) -> String {
    if let Some(content) = response.pointer("/candidates/0/content") {
        return collect_text(content);
    }
    String::new()
}

fn extract_usage(response: &Value) -> TokenUsage {
    TokenUsage {
        prompt_tokens: response
            .pointer("/usageMetadata/promptTokenCount")
            .and_then(Value::as_u64),
        completion_tokens: response
            .pointer("/usageMetadata/candidatesTokenCount")
            .and_then(Value::as_u64),
        total_tokens: response
            .pointer("/usageMetadata/totalTokenCount")
            .and_then(Value::as_u64),
    }
}

#[async_trait]
impl ReviewModel for GeminiModel {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<ModelResponse, ServiceError> {
        let endpoint = self.endpoint();
        let payload = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        // API key는 헤더로만 보내 URL(오류 메시지 포함)에 남지 않게 한다.
        let request = if self.credential.starts_with("AIza") {
            self.client
                .post(endpoint)
                .header(API_KEY_HEADER, &self.credential)
                .json(&payload)
        } else {
            self.client
                .post(endpoint)
                .bearer_auth(&self.credential)
                .json(&payload)
        };

        let response = send_json(self.name(), ACTION, request).await?;

        // 공백 여부만 검사하고 본문은 원문 그대로 돌려준다.
        let content = extract_gemini_content(&response);
        if content.trim().is_empty() {
            if let Some(reason) = response
                .pointer("/promptFeedback/blockReason")
                .and_then(Value::as_str)
            {
                return Err(ServiceError::InvalidResponse {
                    provider: self.name().to_string(),
                    action: ACTION.to_string(),
                    detail: format!("prompt blocked ({reason})"),
                });
            }
            return Err(ServiceError::EmptyContent {
                provider: self.name().to_string(),
            });
        }

        Ok(ModelResponse {
            content,
            usage: extract_usage(&response),
        })
    }
}
