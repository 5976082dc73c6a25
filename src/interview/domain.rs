use serde::{Deserialize, Serialize};

/// One vertex in a (domain, level) question graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub id: u32,
    pub prompt: String,
    /// Presence of any of these in an answer counts toward the keyword score.
    pub keywords: Vec<String>,
    /// Reference material the answer is compared against. `None` marks a
    /// definition that populated neither form; such nodes degrade to
    /// keyword-only scoring instead of failing the set.
    pub expected: Option<ExpectedContent>,
    /// Keyword-triggered out-edges, kept in definition order. The first
    /// trigger matching an answer wins.
    pub routing: Vec<RouteRule>,
    pub default_next: DefaultNext,
    /// Phrases indicating the candidate admits not knowing the topic.
    pub low_knowledge_phrases: Vec<String>,
    /// Text surfaced to the candidate when the low-knowledge signal fires.
    /// The engine only returns it; presenting it is the caller's concern.
    pub low_knowledge_reply: Option<String>,
}

/// Reference content for scoring, in exactly one of two forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedContent {
    /// A list of reference answers; each contributes an equal share.
    References(Vec<String>),
    /// A single reference summary scored directly against the answer.
    Summary(String),
}

/// One keyword-triggered out-edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    pub trigger: String,
    pub target: u32,
}

/// The default out-edge of a node, taken when no routing trigger matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultNext {
    /// No default configured; resolution falls through to sequential order.
    #[default]
    Unset,
    /// The interview explicitly ends at this node.
    EndInterview,
    GoTo(u32),
}

/// Per-answer detector output. Ephemeral; never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalResult {
    pub has_profanity: bool,
    pub is_low_knowledge: bool,
    pub is_off_topic: bool,
}

/// One scored answer. Created once per submission, immutable thereafter;
/// callers accumulate these and hand the full sequence to the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub question_id: u32,
    pub question_text: String,
    pub answer_text: String,
    /// 0-100.
    pub score: u8,
    pub keywords_matched: Vec<String>,
    pub is_off_topic: bool,
    pub is_low_knowledge: bool,
    pub has_profanity: bool,
    pub feedback: String,
}
