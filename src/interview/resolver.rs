use tracing::debug;

use super::domain::{DefaultNext, QuestionNode};
use super::signals::{self, normalize};
use super::store::QuestionStore;

/// Outcome of one routing decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// The next question, or `None` when the interview ends here.
    pub next: Option<&'a QuestionNode>,
    pub is_low_knowledge: bool,
    /// Populated only when the low-knowledge signal decided the route and the
    /// node configures a reply for it.
    pub low_knowledge_reply: Option<&'a str>,
}

impl<'a> Resolution<'a> {
    fn terminal() -> Self {
        Self {
            next: None,
            is_low_knowledge: false,
            low_knowledge_reply: None,
        }
    }

    fn next(node: &'a QuestionNode) -> Self {
        Self {
            next: Some(node),
            is_low_knowledge: false,
            low_knowledge_reply: None,
        }
    }
}

/// Decide the next question for one submitted answer.
///
/// Deterministic and total over (graph state, answer text), evaluated in
/// strict priority order: low-knowledge short-circuit, then routing triggers
/// in definition order, then the default edge, then sequential fallback.
/// Profanity is informational only and never consulted here.
pub fn resolve<'a>(
    store: &'a QuestionStore,
    domain: &str,
    level: &str,
    current_id: u32,
    answer: &str,
) -> Resolution<'a> {
    let Some(current) = store.find_by_id(domain, level, current_id) else {
        return Resolution::terminal();
    };

    // Declared ignorance wins over routing, but only when the node has a
    // reply configured and a usable default edge. With an unset (or dangling)
    // default the signal falls through as if it never fired.
    if signals::is_low_knowledge(answer, &current.low_knowledge_phrases) {
        if let Some(reply) = current.low_knowledge_reply.as_deref() {
            match current.default_next {
                DefaultNext::GoTo(target) => {
                    if let Some(node) = store.find_by_id(domain, level, target) {
                        debug!(current_id, target, "low-knowledge short-circuit");
                        return Resolution {
                            next: Some(node),
                            is_low_knowledge: true,
                            low_knowledge_reply: Some(reply),
                        };
                    }
                }
                DefaultNext::EndInterview => {
                    return Resolution {
                        next: None,
                        is_low_knowledge: true,
                        low_knowledge_reply: Some(reply),
                    };
                }
                DefaultNext::Unset => {}
            }
        }
    }

    // First trigger matching the answer wins, by definition order; ties are
    // never broken by length or quality of the match. A matched trigger with
    // a dangling target falls through to the default edge.
    let answer_normalized = normalize(answer);
    if !answer_normalized.is_empty() {
        let matched = current.routing.iter().find(|rule| {
            let trigger = normalize(&rule.trigger);
            !trigger.is_empty() && answer_normalized.contains(&trigger)
        });
        if let Some(rule) = matched {
            if let Some(node) = store.find_by_id(domain, level, rule.target) {
                debug!(current_id, trigger = %rule.trigger, target = rule.target, "keyword-routed");
                return Resolution::next(node);
            }
        }
    }

    match current.default_next {
        DefaultNext::GoTo(target) => {
            if let Some(node) = store.find_by_id(domain, level, target) {
                return Resolution::next(node);
            }
        }
        DefaultNext::EndInterview => return Resolution::terminal(),
        DefaultNext::Unset => {}
    }

    match store.next_sequential(domain, level, current_id) {
        Some(node) => Resolution::next(node),
        None => Resolution::terminal(),
    }
}
