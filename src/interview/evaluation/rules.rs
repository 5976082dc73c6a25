use super::super::domain::ExpectedContent;
use super::super::signals::normalize;

pub(crate) const KEYWORD_WEIGHT: f64 = 40.0;
pub(crate) const CONTENT_WEIGHT: f64 = 60.0;
const MATCH_RATIO_THRESHOLD: f64 = 0.3;

/// Keyword share of the score: each keyword present as a case-insensitive
/// substring earns an equal slice of the keyword weight.
pub(crate) fn keyword_component(answer: &str, keywords: &[String]) -> (f64, Vec<String>) {
    if keywords.is_empty() {
        return (0.0, Vec::new());
    }

    let per_keyword = KEYWORD_WEIGHT / keywords.len() as f64;
    let mut score = 0.0;
    let mut matched = Vec::new();
    for keyword in keywords {
        let needle = normalize(keyword);
        if !needle.is_empty() && answer.contains(&needle) {
            matched.push(keyword.clone());
            score += per_keyword;
        }
    }
    (score, matched)
}

/// Content share of the score: word overlap against the reference material.
/// Only words longer than 3 characters count, and a reference contributes
/// nothing unless more than 30% of its words appear in the answer.
pub(crate) fn content_component(answer: &str, expected: &ExpectedContent) -> f64 {
    match expected {
        ExpectedContent::References(references) => {
            if references.is_empty() {
                return 0.0;
            }
            let per_reference = CONTENT_WEIGHT / references.len() as f64;
            references
                .iter()
                .filter_map(|reference| overlap_ratio(answer, reference))
                .map(|ratio| per_reference * ratio)
                .sum()
        }
        ExpectedContent::Summary(summary) => overlap_ratio(answer, summary)
            .map(|ratio| CONTENT_WEIGHT * ratio)
            .unwrap_or(0.0),
    }
}

fn overlap_ratio(answer: &str, reference: &str) -> Option<f64> {
    let reference = normalize(reference);
    let words: Vec<&str> = reference
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .collect();
    if words.is_empty() {
        return None;
    }

    let matched = words.iter().filter(|word| answer.contains(*word)).count();
    let ratio = matched as f64 / words.len() as f64;
    (ratio > MATCH_RATIO_THRESHOLD).then_some(ratio)
}

/// Feedback tier by score, with up to three matched keywords appended.
pub(crate) fn feedback_for(score: u8, matched: &[String]) -> String {
    let mut feedback = if score >= 80 {
        "Excellent answer! You covered the key points well.".to_string()
    } else if score >= 60 {
        "Good answer! You mentioned some relevant points.".to_string()
    } else if score >= 40 {
        "Your answer is on the right track, but could be more detailed.".to_string()
    } else {
        "Consider reviewing this topic. Your answer missed some key concepts.".to_string()
    };

    if !matched.is_empty() {
        let examples: Vec<&str> = matched.iter().take(3).map(String::as_str).collect();
        feedback.push_str(&format!(" You mentioned: {}.", examples.join(", ")));
    }

    feedback
}
