//! CLI 명령 파싱 모듈.
//! 실행 옵션은 없고 `--help`/`--version`만 제공한다.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gentle-review", version)]
#[command(
    about = "Turn blunt code review comments into an empathetic, educational report",
    long_about = "Reads input.json (code_snippet + review_comments) from the working directory, \
asks Gemini for a supportive rewrite of each comment, prints the report and saves it to report.md.\n\n\
The API key is read from GOOGLE_API_KEY or a local .env file."
)]
pub struct Cli {}

impl Cli {
    /// 인자를 검증한다. `--help`/`--version`/알 수 없는 인자는 clap이 처리하고 종료한다.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
