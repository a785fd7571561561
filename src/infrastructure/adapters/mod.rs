//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod json_input;
mod report_file;
mod reporter;

pub use json_input::JsonFileInput;
pub use report_file::FileReportWriter;
pub use reporter::ConsoleReporter;
