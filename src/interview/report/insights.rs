use super::super::domain::AnswerEvaluation;
use super::summary::ReportCounts;
use super::views::OverallRating;

const TOPIC_STOP_WORDS: &[&str] = &[
    "what", "is", "are", "the", "and", "for", "with", "about", "how", "why",
];

/// Decision table, evaluated top to bottom; first match wins.
pub(crate) fn overall_rating(counts: &ReportCounts) -> OverallRating {
    if counts.average_score >= 80 && counts.keyword_accuracy >= 80 && counts.off_topic == 0 {
        OverallRating::Excellent
    } else if counts.average_score >= 60 && counts.keyword_accuracy >= 60 && counts.off_topic <= 1 {
        OverallRating::Good
    } else if counts.average_score >= 40 && counts.keyword_accuracy >= 40 {
        OverallRating::Fair
    } else {
        OverallRating::Poor
    }
}

/// Advisory strings in fixed order, each emitted only when its trigger holds.
pub(crate) fn recommendations(counts: &ReportCounts) -> Vec<String> {
    let mut recommendations = Vec::new();

    if counts.off_topic > 0 {
        recommendations.push(format!(
            "You went off-topic {} time(s). Focus on answering the specific question asked and include relevant keywords.",
            counts.off_topic
        ));
    }

    if counts.low_knowledge > 0 {
        recommendations.push(format!(
            "You indicated low knowledge on {} question(s). Consider reviewing the fundamentals of this domain.",
            counts.low_knowledge
        ));
    }

    if counts.profanity > 0 {
        recommendations.push(format!(
            "Please maintain a professional tone during interviews. Inappropriate language was detected {} time(s).",
            counts.profanity
        ));
    }

    if counts.keyword_accuracy < 50 {
        recommendations.push(
            "Your answers lacked relevant keywords. Try to include technical terms and concepts related to the questions."
                .to_string(),
        );
    }

    if counts.average_score < 60 {
        recommendations.push(format!(
            "Your average score was {}%. Focus on providing more detailed and accurate answers.",
            counts.average_score
        ));
    } else if counts.average_score >= 80 {
        recommendations.push(format!(
            "Great job! You scored {}% on average. Keep up the good work!",
            counts.average_score
        ));
    }

    recommendations
}

/// Topic words extracted from low-scoring questions: the first word longer
/// than 4 characters that is not a stop word, title-cased, de-duplicated in
/// encounter order. Falls back to the declared role when nothing qualifies
/// and the average score is under 70.
pub(crate) fn topics_to_cover(
    evaluations: &[AnswerEvaluation],
    counts: &ReportCounts,
    role: Option<&str>,
) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();

    for evaluation in evaluations {
        if evaluation.score >= 60 || evaluation.is_off_topic {
            continue;
        }
        let topic = evaluation
            .question_text
            .to_lowercase()
            .split_whitespace()
            .find(|word| word.len() > 4 && !TOPIC_STOP_WORDS.contains(word))
            .map(title_case);
        if let Some(topic) = topic {
            if !topics.contains(&topic) {
                topics.push(topic);
            }
        }
    }

    if topics.is_empty() && counts.average_score < 70 {
        topics.push(role.unwrap_or("General technical concepts").to_string());
    }

    topics
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
