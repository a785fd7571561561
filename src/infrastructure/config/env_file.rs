//! 로컬 `.env` 파일 조회.
//! 프로세스 환경을 바꾸지 않고 필요한 키 하나만 읽는다.

use std::path::Path;

/// `.env`에서 `key` 값을 찾는다. 파일이 없으면 `None`.
/// 같은 키가 여러 번 나오면 `dotenvy::load`처럼 처음 값을 쓴다.
pub fn lookup_env_file(path: &Path, key: &str) -> Result<Option<String>, dotenvy::Error> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Ok(None),
        Err(err) => return Err(err),
    };

    for entry in entries {
        let (name, value) = entry?;
        if name == key {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
