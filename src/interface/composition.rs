//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::ReviewModel;
use crate::application::usecases::empathetic_review::EmpatheticReviewUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, FileReportWriter, JsonFileInput};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::providers::build_model;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    input: JsonFileInput,
    model: Box<dyn ReviewModel>,
    report_writer: FileReportWriter,
    reporter: ConsoleReporter,
}

impl AppComposition {
    /// 설정값으로 실제 모델 클라이언트를 포함한 조합을 생성한다.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_model(config, build_model(config))
    }

    /// 모델 구현을 외부에서 주입한다.
    pub fn with_model(config: &AppConfig, model: Box<dyn ReviewModel>) -> Self {
        Self {
            input: JsonFileInput::new(&config.input_path),
            model,
            report_writer: FileReportWriter::new(&config.report_path),
            reporter: ConsoleReporter::new(),
        }
    }

    /// 리뷰 실행 유스케이스를 생성한다.
    pub fn review_usecase(&self) -> EmpatheticReviewUseCase<'_> {
        EmpatheticReviewUseCase {
            input: &self.input,
            model: &*self.model,
            report_writer: &self.report_writer,
            reporter: &self.reporter,
        }
    }
}
