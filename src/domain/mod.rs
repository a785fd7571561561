//! Domain layer
//! 리뷰 요청/보고서와 프롬프트 규칙을 외부 의존성 없이 표현한다.

pub mod prompt;
pub mod review;
