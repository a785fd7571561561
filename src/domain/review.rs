//! 리뷰 도메인 엔티티/값 객체.

use serde::Deserialize;

/// 입력 파일 한 건에 해당하는 리뷰 요청.
/// 두 필드 모두 필수이며, 로딩 이후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewRequest {
    pub code_snippet: String,
    pub review_comments: Vec<String>,
}

/// 모델이 돌려준 리뷰 본문. 별도 구조를 해석하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
    pub usage: TokenUsage,
}

impl From<ModelResponse> for ReviewReport {
    fn from(response: ModelResponse) -> Self {
        Self {
            text: response.content,
        }
    }
}
