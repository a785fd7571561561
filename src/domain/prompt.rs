//! 리뷰 프롬프트 구성 규칙.
//!
//! 입력(코드 + 코멘트)만으로 결정되는 순수 함수이며, 코드/코멘트 내용은
//! 이스케이프 없이 그대로 삽입한다.

use crate::domain::review::ReviewRequest;

/// 코드 스니펫과 원본 코멘트 목록으로 모델 지시문을 생성한다.
/// 코멘트가 비어 있으면 코멘트 섹션도 빈 채로 남는다.
pub fn build_prompt(code: &str, comments: &[String]) -> String {
    let comments_block = comments
        .iter()
        .map(|comment| format!("- {comment}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::new();
    out.push_str(
        "**Persona:** You are an expert senior software engineer and a patient, empathetic mentor. \
         Your goal is to provide code review feedback that is constructive, educational, and encouraging, never discouraging.\n\n",
    );
    out.push_str(
        "**Context:** I have a Python code snippet and a list of direct, critical review comments. \
         I need you to transform this raw feedback into a supportive and educational report.\n\n",
    );

    out.push_str("**Code Snippet:**\n");
    out.push_str("```python\n");
    out.push_str(code);
    out.push_str("\n```\n\n");

    out.push_str("**Original Critical Comments:**\n");
    out.push_str(&comments_block);
    out.push_str("\n\n");

    out.push_str("**Your Task:**\n");
    out.push_str(
        "Generate a single, well-formatted Markdown report. For each original comment, create a separate section. \
         Each section must contain exactly these three sub-headings:\n",
    );
    out.push_str(
        "1.  ***Positive Rephrasing:*** A gentle and encouraging version of the feedback.\n",
    );
    out.push_str(
        "2.  ***The 'Why':*** A clear, concise explanation of the underlying software engineering principle \
         (e.g., performance, readability, best practices).\n",
    );
    out.push_str(
        "3.  ***Suggested Improvement:*** A concrete, corrected code example demonstrating the recommended fix.\n\n",
    );

    out.push_str("**Stand Out Features (Please Implement):**\n");
    out.push_str(
        "- **Link to Resources:** Where applicable, include a markdown-formatted link to authoritative external documentation \
         (like a specific Python PEP 8 rule or a relevant article) to support your suggestion.\n",
    );
    out.push_str(
        "- **Holistic Summary:** After analyzing all individual comments, please add a final section titled \
         \"### Overall Feedback\" that summarizes the review in an encouraging way, focusing on the learning opportunity.\n\n",
    );

    out.push_str("Begin the report immediately with the analysis of the first comment.\n");
    out
}

/// 요청 객체 단위로 프롬프트를 생성한다.
pub fn build_request_prompt(request: &ReviewRequest) -> String {
    build_prompt(&request.code_snippet, &request.review_comments)
}
