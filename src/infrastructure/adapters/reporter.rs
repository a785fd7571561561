//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::debug;

use crate::application::ports::Reporter;

/// 표준 출력으로 보고서와 진단 메시지를 내보내는 어댑터.
/// 실패 메시지도 사용자 출력의 일부로 stdout에 쓴다.
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn line(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            debug!("console writer lock poisoned");
            return;
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            debug!(error = %err, "failed to write console output");
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn banner(&self, title: &str) {
        self.line(&format!("--- {title} ---"));
    }

    fn raw(&self, text: &str) {
        self.line(text);
    }

    fn notice(&self, line: &str) {
        self.line(line);
    }

    fn error(&self, line: &str) {
        self.line(line);
    }
}
