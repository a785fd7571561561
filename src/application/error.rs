//! 리뷰 실행 실패 분류.
//!
//! 사용자에게는 "입력 파일 없음"과 "그 외" 두 갈래로만 보이지만,
//! 로그에는 `kind()`로 세부 원인을 남긴다.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 생성 모델 호출 경계에서 발생하는 실패.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{provider}: failed to {action}: {source}")]
    Transport {
        provider: String,
        action: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{provider}: {action} failed ({status}): {message}")]
    Status {
        provider: String,
        action: String,
        status: u16,
        message: String,
    },
    #[error("{provider}: invalid response while {action}: {detail}")]
    InvalidResponse {
        provider: String,
        action: String,
        detail: String,
    },
    #[error("{provider}: empty response content")]
    EmptyContent { provider: String },
}

impl ServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "service.transport",
            Self::Status { .. } => "service.status",
            Self::InvalidResponse { .. } => "service.invalid_response",
            Self::EmptyContent { .. } => "service.empty_content",
        }
    }
}

/// 리뷰 유스케이스 전체의 실패.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("'{}' not found. Please make sure the file exists in the same directory.", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid review input in {}: {source}", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReviewError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "input.not_found",
            Self::InputRead { .. } => "input.read",
            Self::InvalidInput { .. } => "input.invalid",
            Self::Service(err) => err.kind(),
            Self::ReportWrite { .. } => "report.write",
        }
    }

    /// 콘솔에 출력할 한 줄 진단 메시지.
    pub fn user_message(&self) -> String {
        match self {
            Self::InputNotFound { .. } => format!("Error: {self}"),
            _ => format!("An error occurred: {self}"),
        }
    }
}
