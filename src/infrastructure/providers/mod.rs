//! 생성 모델 provider 모듈.
//! 원격 API 호출 결과를 `ModelResponse`로 표준화한다.

mod api_runner;
pub mod gemini;

use crate::application::ports::ReviewModel;
use crate::infrastructure::config::AppConfig;

pub use gemini::GeminiModel;

/// 설정에 맞는 리뷰 모델을 구성한다.
pub fn build_model(config: &AppConfig) -> Box<dyn ReviewModel> {
    Box::new(GeminiModel::from_config(config))
}
