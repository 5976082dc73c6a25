use serde::Serialize;

/// Rating bucket derived from the score/accuracy decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl OverallRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Aggregate performance report for one completed interview.
///
/// Derived data: recomputed from the evaluation sequence on every request,
/// never incrementally maintained. `total_questions` and `questions_answered`
/// are currently always equal; both are kept for forward compatibility with
/// partial interviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewReport {
    pub total_questions: usize,
    pub questions_answered: usize,
    pub average_score: u8,
    pub off_topic_count: usize,
    pub low_knowledge_count: usize,
    pub profanity_count: usize,
    /// Percent of questions with at least one matched keyword and no
    /// off-topic or low-knowledge flag.
    pub keyword_accuracy: u8,
    pub overall_rating: OverallRating,
    pub recommendations: Vec<String>,
    pub topics_to_cover: Vec<String>,
}
