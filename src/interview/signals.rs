//! Per-answer signal detectors.
//!
//! All three detectors are pure, stateless, case-insensitive functions over
//! the raw answer text. They are substring/keyword heuristics, nothing more:
//! they flag only confidently detectable conditions and stay quiet otherwise.

use super::domain::{QuestionNode, SignalResult};

/// Fixed profanity vocabulary, matched as whole words.
pub const PROFANITY_WORDS: &[&str] = &[
    "fuck", "shit", "damn", "hell", "bitch", "ass", "bastard", "crap",
    "stupid", "idiot", "dumb", "moron", "retard", "piss",
];

/// Stock admissions of not knowing a topic, usable as a node's
/// `low_knowledge_phrases` when a question set does not configure its own.
pub const DEFAULT_LOW_KNOWLEDGE_PHRASES: &[&str] = &[
    "i don't know",
    "i don't know that",
    "i have no idea",
    "i'm not sure",
    "i'm not familiar",
    "i haven't learned",
    "i don't understand",
    "i can't answer",
];

/// Meta-conversational deflections: phrasing that asks the interviewer
/// something rather than answering the question.
const DEFLECTION_PHRASES: &[&str] = &[
    "can you tell me",
    "can you explain",
    "can you repeat",
    "what do you mean",
    "what about you",
    "why are you asking",
    "i have a question",
    "ask me something else",
    "let's talk about",
    "can we skip",
];

/// Run all three detectors against one node's configuration.
pub fn detect(answer: &str, node: &QuestionNode) -> SignalResult {
    SignalResult {
        has_profanity: has_profanity(answer),
        is_low_knowledge: is_low_knowledge(answer, &node.low_knowledge_phrases),
        is_off_topic: is_off_topic(answer, &node.keywords),
    }
}

/// True when any vocabulary entry appears as a whole word in the answer.
pub fn has_profanity(answer: &str) -> bool {
    let answer = normalize(answer);
    if answer.is_empty() {
        return false;
    }
    PROFANITY_WORDS
        .iter()
        .any(|word| contains_whole_word(&answer, word))
}

/// True when the answer matches any configured low-knowledge phrase.
///
/// A phrase matches when the normalized answer equals it exactly, when a
/// single-word phrase appears as a whole word, or when a multi-word phrase
/// appears as a substring or has all of its significant words (length > 2)
/// present in order.
pub fn is_low_knowledge<S: AsRef<str>>(answer: &str, phrases: &[S]) -> bool {
    let answer = normalize(answer);
    if answer.is_empty() || phrases.is_empty() {
        return false;
    }

    phrases.iter().any(|phrase| {
        let phrase = normalize(phrase.as_ref());
        if phrase.is_empty() {
            return false;
        }
        if answer == phrase {
            return true;
        }

        let words: Vec<&str> = phrase.split_whitespace().collect();
        match words.as_slice() {
            [] => false,
            [word] => contains_whole_word(&answer, word),
            _ => {
                if answer.contains(&phrase) {
                    return true;
                }
                let significant: Vec<&str> =
                    words.iter().copied().filter(|word| word.len() > 2).collect();
                !significant.is_empty() && appear_in_order(&answer, &significant)
            }
        }
    })
}

/// True only for confidently detectable deflection: a substantial answer
/// (more than 5 real words) that matches none of the question's keywords and
/// contains a meta-conversational phrase. Short or merely vague answers are
/// never flagged.
pub fn is_off_topic<S: AsRef<str>>(answer: &str, keywords: &[S]) -> bool {
    let answer = normalize(answer);
    if answer.is_empty() || keywords.is_empty() {
        return false;
    }

    let real_words = answer
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .count();
    if real_words <= 5 {
        return false;
    }

    let any_keyword = keywords.iter().any(|keyword| {
        let keyword = normalize(keyword.as_ref());
        !keyword.is_empty() && answer.contains(&keyword)
    });
    if any_keyword {
        return false;
    }

    DEFLECTION_PHRASES
        .iter()
        .any(|phrase| answer.contains(phrase))
}

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whole-word containment over already-normalized text: the needle must not
/// be bordered by alphanumeric characters on either side.
pub(crate) fn contains_whole_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(position) = text[start..].find(word) {
        let begin = start + position;
        let end = begin + word.len();
        let clear_before = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if clear_before && clear_after {
            return true;
        }
        start = end;
    }
    false
}

fn appear_in_order(text: &str, words: &[&str]) -> bool {
    let mut cursor = 0;
    for word in words {
        match text[cursor..].find(word) {
            Some(position) => cursor += position + word.len(),
            None => return false,
        }
    }
    true
}
