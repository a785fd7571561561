//! 보고서 파일 저장 어댑터.

use std::fs;
use std::path::PathBuf;

use crate::application::error::ReviewError;
use crate::application::ports::ReportWriter;
use crate::domain::review::ReviewReport;

/// 모델 응답 원문을 그대로 파일에 덮어쓴다.
pub struct FileReportWriter {
    path: PathBuf,
}

impl FileReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportWriter for FileReportWriter {
    fn write(&self, report: &ReviewReport) -> Result<(), ReviewError> {
        fs::write(&self.path, &report.text).map_err(|source| ReviewError::ReportWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
