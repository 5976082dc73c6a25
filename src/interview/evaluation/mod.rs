mod rules;

use serde::Serialize;

use super::domain::{AnswerEvaluation, ExpectedContent, QuestionNode};
use super::signals::{self, normalize};

/// Output of [`evaluate`]: the score with its supporting detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAnswer {
    /// 0-100.
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub feedback: String,
}

/// Score a free-text answer against a question's keyword list and expected
/// content.
///
/// Keywords carry 40 of 100 points, content overlap the remaining 60; the sum
/// is clamped to [0, 100] and rounded. A node without usable expected content
/// degrades to keyword-only scoring. An empty or whitespace-only answer
/// scores 0 with fixed feedback; declared-ignorance handling lives in the
/// resolver, not here.
pub fn evaluate(
    answer: &str,
    expected: Option<&ExpectedContent>,
    keywords: &[String],
) -> ScoredAnswer {
    let answer = normalize(answer);
    if answer.is_empty() {
        return ScoredAnswer {
            score: 0,
            matched_keywords: Vec::new(),
            feedback: "No answer provided.".to_string(),
        };
    }

    let (keyword_score, matched_keywords) = rules::keyword_component(&answer, keywords);
    let content_score = expected
        .map(|expected| rules::content_component(&answer, expected))
        .unwrap_or(0.0);

    let score = (keyword_score + content_score).round().clamp(0.0, 100.0) as u8;
    let feedback = rules::feedback_for(score, &matched_keywords);

    ScoredAnswer {
        score,
        matched_keywords,
        feedback,
    }
}

/// Score an answer against a node and compose the full immutable record,
/// signal flags included. One call per answer submission.
pub fn assess(node: &QuestionNode, answer: &str) -> AnswerEvaluation {
    let signals = signals::detect(answer, node);
    let scored = evaluate(answer, node.expected.as_ref(), &node.keywords);

    AnswerEvaluation {
        question_id: node.id,
        question_text: node.prompt.clone(),
        answer_text: answer.to_string(),
        score: scored.score,
        keywords_matched: scored.matched_keywords,
        is_off_topic: signals.is_off_topic,
        is_low_knowledge: signals.is_low_knowledge,
        has_profanity: signals.has_profanity,
        feedback: scored.feedback,
    }
}
