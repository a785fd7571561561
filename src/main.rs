//! `gentle-review` 바이너리 진입점.

use anyhow::{Context, Result};

use gentle_review::infrastructure::config::AppConfig;
use gentle_review::interface::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let _cli = Cli::parse_args();

    // 자격 증명이 없으면 입력 파일을 읽기 전에 종료한다.
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    // 리뷰 실패는 콘솔에 보고된 뒤 정상 종료로 끝난다.
    gentle_review::run(&config).await;
}

fn load_config() -> Result<AppConfig> {
    AppConfig::from_env().context("failed to load startup configuration")
}
