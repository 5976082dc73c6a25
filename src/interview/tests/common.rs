use crate::interview::catalog::QuestionCatalog;
use crate::interview::domain::{
    AnswerEvaluation, DefaultNext, ExpectedContent, QuestionNode, RouteRule,
};
use crate::interview::store::QuestionStore;

pub(super) const DOMAIN: &str = "backend";
pub(super) const LEVEL: &str = "beginner";

pub(super) fn node(id: u32, prompt: &str) -> QuestionNode {
    QuestionNode {
        id,
        prompt: prompt.to_string(),
        keywords: Vec::new(),
        expected: None,
        routing: Vec::new(),
        default_next: DefaultNext::Unset,
        low_knowledge_phrases: Vec::new(),
        low_knowledge_reply: None,
    }
}

pub(super) fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

pub(super) fn route(trigger: &str, target: u32) -> RouteRule {
    RouteRule {
        trigger: trigger.to_string(),
        target,
    }
}

pub(super) fn references(texts: &[&str]) -> Option<ExpectedContent> {
    Some(ExpectedContent::References(
        texts.iter().map(|text| text.to_string()).collect(),
    ))
}

pub(super) fn summary(text: &str) -> Option<ExpectedContent> {
    Some(ExpectedContent::Summary(text.to_string()))
}

pub(super) fn store_with(questions: Vec<QuestionNode>) -> QuestionStore {
    let mut catalog = QuestionCatalog::new();
    catalog.insert_set(DOMAIN, LEVEL, questions);
    QuestionStore::new(catalog)
}

/// Four-node set exercising every out-edge kind: a keyword trigger, a
/// concrete default edge, a sequential fallthrough, and an explicit end.
pub(super) fn routed_set() -> Vec<QuestionNode> {
    let mut first = node(1, "What is an API and how does it work?");
    first.keywords = keywords(&["api", "endpoint"]);
    first.routing = vec![route("alpha", 3)];
    first.default_next = DefaultNext::GoTo(2);

    let second = node(2, "Explain the difference between REST and GraphQL.");

    let mut third = node(3, "What are HTTP status codes used for?");
    third.default_next = DefaultNext::EndInterview;

    let fourth = node(4, "What is a primary key?");

    vec![first, second, third, fourth]
}

pub(super) fn evaluation(id: u32, score: u8, matched: &[&str]) -> AnswerEvaluation {
    AnswerEvaluation {
        question_id: id,
        question_text: format!("Question {id}"),
        answer_text: "an answer".to_string(),
        score,
        keywords_matched: keywords(matched),
        is_off_topic: false,
        is_low_knowledge: false,
        has_profanity: false,
        feedback: String::new(),
    }
}
