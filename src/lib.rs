//! gentle-review library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::review::ReviewReport;
use infrastructure::config::AppConfig;
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
/// 실패는 콘솔에 한 줄로 보고되고 `None`을 반환한다.
pub async fn run(config: &AppConfig) -> Option<ReviewReport> {
    let composition = AppComposition::new(config);
    composition.review_usecase().run().await
}
