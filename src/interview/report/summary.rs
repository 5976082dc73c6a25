use super::super::domain::AnswerEvaluation;

/// Predicate counts and guarded averages over one evaluation sequence.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ReportCounts {
    pub total: usize,
    pub average_score: u8,
    pub off_topic: usize,
    pub low_knowledge: usize,
    pub profanity: usize,
    pub keyword_accuracy: u8,
}

pub(crate) fn tally(evaluations: &[AnswerEvaluation]) -> ReportCounts {
    if evaluations.is_empty() {
        return ReportCounts::default();
    }

    let total = evaluations.len();
    let score_sum: u32 = evaluations
        .iter()
        .map(|evaluation| evaluation.score as u32)
        .sum();
    let average_score = (score_sum as f64 / total as f64).round() as u8;

    let off_topic = evaluations
        .iter()
        .filter(|evaluation| evaluation.is_off_topic)
        .count();
    let low_knowledge = evaluations
        .iter()
        .filter(|evaluation| evaluation.is_low_knowledge)
        .count();
    let profanity = evaluations
        .iter()
        .filter(|evaluation| evaluation.has_profanity)
        .count();

    let accurate = evaluations
        .iter()
        .filter(|evaluation| {
            !evaluation.keywords_matched.is_empty()
                && !evaluation.is_off_topic
                && !evaluation.is_low_knowledge
        })
        .count();
    let keyword_accuracy = (accurate as f64 * 100.0 / total as f64).round() as u8;

    ReportCounts {
        total,
        average_score,
        off_topic,
        low_knowledge,
        profanity,
        keyword_accuracy,
    }
}
