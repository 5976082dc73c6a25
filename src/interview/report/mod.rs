mod insights;
mod summary;
mod views;

pub use views::{InterviewReport, OverallRating};

use super::domain::AnswerEvaluation;

/// Derive the aggregate report for one completed interview.
///
/// Recomputed from scratch on every call and idempotent over the same input.
/// All divisions are guarded: an empty or partially malformed evaluation
/// sequence produces a zeroed report, never an error. `role` is the
/// interview's declared role/domain, used only as the generic-topic fallback.
pub fn aggregate(evaluations: &[AnswerEvaluation], role: Option<&str>) -> InterviewReport {
    let counts = summary::tally(evaluations);
    let overall_rating = insights::overall_rating(&counts);
    let recommendations = insights::recommendations(&counts);
    let topics_to_cover = insights::topics_to_cover(evaluations, &counts, role);

    InterviewReport {
        total_questions: counts.total,
        questions_answered: counts.total,
        average_score: counts.average_score,
        off_topic_count: counts.off_topic,
        low_knowledge_count: counts.low_knowledge,
        profanity_count: counts.profanity,
        keyword_accuracy: counts.keyword_accuracy,
        overall_rating,
        recommendations,
        topics_to_cover,
    }
}
