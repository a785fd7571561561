//! 모델 HTTP API 호출 공용 유틸리티.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::application::error::ServiceError;

/// 모델 API 호출용 기본 HTTP 클라이언트를 생성한다.
/// 요청 타임아웃은 두지 않는다.
pub fn build_api_client() -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 `ServiceError`로 표준화한다.
pub async fn send_json(
    provider_name: &str,
    action: &str,
    request: RequestBuilder,
) -> Result<Value, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(|err| ServiceError::Transport {
            provider: provider_name.to_string(),
            action: action.to_string(),
            source: Box::new(err.without_url()),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ServiceError::Transport {
            provider: provider_name.to_string(),
            action: format!("read {action} response body"),
            source: Box::new(err.without_url()),
        })?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            provider: provider_name.to_string(),
            action: action.to_string(),
            status: status.as_u16(),
            message: summarize_error_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|err| ServiceError::InvalidResponse {
        provider: provider_name.to_string(),
        action: action.to_string(),
        detail: err.to_string(),
    })
}

/// 오류 응답 본문을 한 줄 메시지로 줄인다.
/// Google 계열 `{"error": {"message": ...}}` 형식이면 message만 사용한다.
pub fn summarize_error_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) = value.pointer("/error/message").and_then(Value::as_str)
    {
        return collapse_whitespace(message);
    }

    let collapsed = collapse_whitespace(body);
    if collapsed.is_empty() {
        "<empty body>".to_string()
    } else {
        collapsed
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// API 응답 구조에서 텍스트를 재귀적으로 추출한다.
pub fn collect_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_string(),
        Value::Array(items) => items
            .iter()
            .map(collect_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(""),
        Value::Object(map) => {
            if let Some(text) = map.get("text").and_then(Value::as_str) {
                return text.to_string();
            }
            if let Some(parts) = map.get("parts") {
                let text = collect_text(parts);
                if !text.is_empty() {
                    return text;
                }
            }
            if let Some(content) = map.get("content") {
                let text = collect_text(content);
                if !text.is_empty() {
                    return text;
                }
            }
            String::new()
        }
        _ => String::new(),
    }
}
