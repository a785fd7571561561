//! 실행 설정(자격 증명/모델/경로) 구성 모듈.
//! 프로세스 시작 시 한 번 해석하고, 이후에는 값으로 전달한다.

mod env_file;

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use env_file::lookup_env_file;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const MODEL_NAME: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const INPUT_FILE: &str = "input.json";
pub const REPORT_FILE: &str = "report.md";
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found. Please create a .env file and set the GOOGLE_API_KEY variable.")]
    MissingApiKey,
    #[error("failed to read {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Clone)]
pub struct AppConfig {
    /// 모델 API 인증 키/토큰
    pub api_key: String,
    /// 생성 모델 식별자(고정값)
    pub model: String,
    /// 모델 API 베이스 URL
    pub api_base: String,
    /// 리뷰 입력 JSON 경로
    pub input_path: PathBuf,
    /// 보고서 출력 경로
    pub report_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("input_path", &self.input_path)
            .field("report_path", &self.report_path)
            .finish()
    }
}

impl AppConfig {
    /// 자격 증명만 받고 나머지는 기본값으로 채운다.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: MODEL_NAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            input_path: PathBuf::from(INPUT_FILE),
            report_path: PathBuf::from(REPORT_FILE),
        }
    }

    /// 프로세스 환경변수 -> 작업 디렉터리 `.env` 순으로 자격 증명을 찾는다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), Path::new(ENV_FILE))
    }

    /// 환경 조회 함수와 `.env` 경로를 주입받아 설정을 구성한다.
    pub fn from_lookup<F>(lookup: F, env_file: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).and_then(non_blank) {
            debug!(source = "env", "api key resolved");
            return Ok(Self::new(key));
        }

        let from_file =
            lookup_env_file(env_file, API_KEY_ENV).map_err(|source| ConfigError::EnvFile {
                path: env_file.to_path_buf(),
                source,
            })?;

        match from_file.and_then(non_blank) {
            Some(key) => {
                debug!(source = %env_file.display(), "api key resolved");
                Ok(Self::new(key))
            }
            None => Err(ConfigError::MissingApiKey),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
