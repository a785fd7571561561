//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use async_trait::async_trait;

use crate::application::error::{ReviewError, ServiceError};
use crate::domain::review::{ModelResponse, ReviewReport, ReviewRequest};

/// 리뷰 요청(코드 + 코멘트)을 읽어오는 포트.
pub trait ReviewInputSource: Send + Sync {
    fn load(&self) -> Result<ReviewRequest, ReviewError>;
}

/// 텍스트 생성 모델 포트. 원격 문제는 모두 `ServiceError`로 보고한다.
#[async_trait]
pub trait ReviewModel: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(&self, prompt: &str) -> Result<ModelResponse, ServiceError>;
}

/// 보고서 저장 포트. 기존 내용은 덮어쓴다.
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &ReviewReport) -> Result<(), ReviewError>;
    /// 확인 메시지에 표시할 저장 위치
    fn location(&self) -> String;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn banner(&self, title: &str);
    fn raw(&self, text: &str);
    fn notice(&self, line: &str);
    fn error(&self, line: &str);
}
