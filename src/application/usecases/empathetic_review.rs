//! 입력 로딩부터 모델 호출, 보고서 출력/저장까지의 전체 흐름 유스케이스.

use tracing::{debug, info};

use crate::application::error::ReviewError;
use crate::application::ports::{ReportWriter, Reporter, ReviewInputSource, ReviewModel};
use crate::domain::prompt::build_request_prompt;
use crate::domain::review::ReviewReport;

pub const REPORT_BANNER: &str = "Empathetic Code Review Report";

/// 리뷰 요청 한 건을 처리한다. 재시도 없이 실패는 그대로 종료 사유가 된다.
pub struct EmpatheticReviewUseCase<'a> {
    pub input: &'a dyn ReviewInputSource,
    pub model: &'a dyn ReviewModel,
    pub report_writer: &'a dyn ReportWriter,
    pub reporter: &'a dyn Reporter,
}

impl<'a> EmpatheticReviewUseCase<'a> {
    /// 로딩 -> 프롬프트 생성 -> 모델 호출 -> 출력/저장 순으로 실행한다.
    /// 모델 호출이 실패하면 보고서 파일은 건드리지 않는다.
    pub async fn execute(&self) -> Result<ReviewReport, ReviewError> {
        let request = self.input.load()?;
        debug!(
            code_bytes = request.code_snippet.len(),
            comments = request.review_comments.len(),
            "review input loaded"
        );

        let prompt = build_request_prompt(&request);
        debug!(prompt_bytes = prompt.len(), model = self.model.name(), "submitting prompt");

        let response = self.model.generate(&prompt).await?;
        info!(
            model = self.model.name(),
            prompt_tokens = ?response.usage.prompt_tokens,
            completion_tokens = ?response.usage.completion_tokens,
            total_tokens = ?response.usage.total_tokens,
            "model response received"
        );
        let report = ReviewReport::from(response);

        self.reporter.banner(REPORT_BANNER);
        self.reporter.raw(&report.text);

        self.report_writer.write(&report)?;
        self.reporter.notice(&format!(
            "\n--- Report also saved to {} ---",
            self.report_writer.location()
        ));

        Ok(report)
    }

    /// 실패를 한 줄로 보고하고 호출자에게는 전파하지 않는다.
    pub async fn run(&self) -> Option<ReviewReport> {
        match self.execute().await {
            Ok(report) => Some(report),
            Err(err) => {
                debug!(kind = err.kind(), error = ?err, "review run failed");
                self.reporter.error(&err.user_message());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::*;
    use crate::application::error::ServiceError;
    use crate::domain::review::{ModelResponse, TokenUsage};
    use crate::infrastructure::adapters::{FileReportWriter, JsonFileInput};

    struct StubModel {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubModel {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReviewModel for StubModel {
        fn name(&self) -> &'static str {
            "Stub"
        }

        async fn generate(&self, prompt: &str) -> Result<ModelResponse, ServiceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(ModelResponse {
                    content: text.clone(),
                    usage: TokenUsage::default(),
                }),
                Err(message) => Err(ServiceError::Status {
                    provider: "Stub".to_string(),
                    action: "generate".to_string(),
                    status: 503,
                    message: message.clone(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        lines: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Reporter for RecordingReporter {
        fn banner(&self, title: &str) {
            self.lines.lock().unwrap().push(format!("--- {title} ---"));
        }

        fn raw(&self, text: &str) {
            self.lines.lock().unwrap().push(text.to_string());
        }

        fn notice(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }

        fn error(&self, line: &str) {
            self.errors.lock().unwrap().push(line.to_string());
        }
    }

    struct Harness {
        dir: TempDir,
        input: JsonFileInput,
        writer: FileReportWriter,
        reporter: RecordingReporter,
    }

    impl Harness {
        fn new(input_json: Option<&str>) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let input_path = dir.path().join("input.json");
            if let Some(body) = input_json {
                fs::write(&input_path, body).unwrap();
            }
            let writer = FileReportWriter::new(dir.path().join("report.md"));
            Self {
                input: JsonFileInput::new(input_path),
                writer,
                reporter: RecordingReporter::default(),
                dir,
            }
        }

        fn report_path(&self) -> std::path::PathBuf {
            self.dir.path().join("report.md")
        }

        async fn run(&self, model: &StubModel) -> Option<ReviewReport> {
            EmpatheticReviewUseCase {
                input: &self.input,
                model,
                report_writer: &self.writer,
                reporter: &self.reporter,
            }
            .run()
            .await
        }
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[tokio::test]
    async fn successful_run_prints_and_saves_report() {
        let harness = Harness::new(Some(
            r#"{"code_snippet": "x=1", "review_comments": ["Use snake_case naming"]}"#,
        ));
        let model = StubModel::ok("OK");

        let report = harness.run(&model).await.expect("report");

        assert_eq!(report.text, "OK");
        assert_eq!(read(&harness.report_path()), "OK");

        let lines = harness.reporter.lines.lock().unwrap().clone();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "--- Empathetic Code Review Report ---");
        assert_eq!(lines[1], "OK");
        assert!(lines[2].starts_with("\n--- Report also saved to "));
        assert!(lines[2].ends_with("report.md ---"));
        assert!(harness.reporter.errors.lock().unwrap().is_empty());

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("x=1"));
        assert!(prompts[0].contains("- Use snake_case naming"));
    }

    #[tokio::test]
    async fn missing_input_reports_once_and_skips_model() {
        let harness = Harness::new(None);
        let model = StubModel::ok("OK");

        assert!(harness.run(&model).await.is_none());

        let errors = harness.reporter.errors.lock().unwrap().clone();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error: '"));
        assert!(errors[0].contains("input.json' not found"));
        assert!(harness.reporter.lines.lock().unwrap().is_empty());
        assert!(model.prompts.lock().unwrap().is_empty());
        assert!(!harness.report_path().exists());
    }

    #[tokio::test]
    async fn missing_comments_key_is_generic_error() {
        let harness = Harness::new(Some(r#"{"code_snippet": "x=1"}"#));
        let model = StubModel::ok("OK");

        assert!(harness.run(&model).await.is_none());

        let errors = harness.reporter.errors.lock().unwrap().clone();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("An error occurred: "));
        assert!(errors[0].contains("review_comments"));
        assert!(model.prompts.lock().unwrap().is_empty());
        assert!(!harness.report_path().exists());
    }

    #[tokio::test]
    async fn malformed_json_is_generic_error() {
        let harness = Harness::new(Some("{not json"));
        let model = StubModel::ok("OK");

        assert!(harness.run(&model).await.is_none());

        let errors = harness.reporter.errors.lock().unwrap().clone();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("An error occurred: "));
        assert!(!harness.report_path().exists());
    }

    #[tokio::test]
    async fn model_failure_keeps_previous_report() {
        let harness = Harness::new(Some(
            r#"{"code_snippet": "x=1", "review_comments": []}"#,
        ));
        fs::write(harness.report_path(), "previous report").unwrap();
        let model = StubModel::failing("quota exceeded");

        assert!(harness.run(&model).await.is_none());

        let errors = harness.reporter.errors.lock().unwrap().clone();
        assert_eq!(
            errors,
            vec!["An error occurred: Stub: generate failed (503): quota exceeded".to_string()]
        );
        assert!(harness.reporter.lines.lock().unwrap().is_empty());
        assert_eq!(read(&harness.report_path()), "previous report");
    }

    #[tokio::test]
    async fn failed_write_skips_confirmation_and_reports_once() {
        let harness = Harness::new(Some(
            r#"{"code_snippet": "x=1", "review_comments": ["Use snake_case naming"]}"#,
        ));
        let unwritable = FileReportWriter::new(harness.dir.path().join("missing").join("report.md"));
        let model = StubModel::ok("OK");

        let outcome = EmpatheticReviewUseCase {
            input: &harness.input,
            model: &model,
            report_writer: &unwritable,
            reporter: &harness.reporter,
        }
        .run()
        .await;

        assert!(outcome.is_none());
        let lines = harness.reporter.lines.lock().unwrap().clone();
        assert_eq!(
            lines,
            vec!["--- Empathetic Code Review Report ---".to_string(), "OK".to_string()]
        );
        assert!(!lines.iter().any(|line| line.contains("Report also saved")));

        let errors = harness.reporter.errors.lock().unwrap().clone();
        assert_eq!(errors.len(), 1);
        assert!(
            errors[0].starts_with("An error occurred: failed to write report"),
            "{}",
            errors[0]
        );
    }

    #[tokio::test]
    async fn empty_comment_list_still_submits_prompt() {
        let harness = Harness::new(Some(r#"{"code_snippet": "x=1", "review_comments": []}"#));
        let model = StubModel::ok("Looks good");

        let report = harness.run(&model).await.expect("report");

        assert_eq!(report.text, "Looks good");
        assert_eq!(model.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn successful_run_overwrites_previous_report() {
        let harness = Harness::new(Some(
            r#"{"code_snippet": "x=1", "review_comments": ["Use snake_case naming"]}"#,
        ));
        fs::write(harness.report_path(), "an older and much longer report body").unwrap();

        harness.run(&StubModel::ok("OK")).await.expect("report");

        assert_eq!(read(&harness.report_path()), "OK");
    }
}
