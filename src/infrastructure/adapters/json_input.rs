//! JSON 파일 기반 리뷰 입력 어댑터.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::application::error::ReviewError;
use crate::application::ports::ReviewInputSource;
use crate::domain::review::ReviewRequest;

/// `{"code_snippet": ..., "review_comments": [...]}` 형식의 파일을 읽는다.
pub struct JsonFileInput {
    path: PathBuf,
}

impl JsonFileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewInputSource for JsonFileInput {
    fn load(&self) -> Result<ReviewRequest, ReviewError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ReviewError::InputNotFound {
                    path: self.path.clone(),
                }
            } else {
                ReviewError::InputRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| ReviewError::InvalidInput {
            path: self.path.clone(),
            source,
        })
    }
}
