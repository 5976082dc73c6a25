use crate::interview::signals::{
    detect, has_profanity, is_low_knowledge, is_off_topic, DEFAULT_LOW_KNOWLEDGE_PHRASES,
};

use super::common::*;

#[test]
fn profanity_matches_whole_words_only() {
    assert!(has_profanity("this is damn hard"));
    assert!(has_profanity("What the HELL is that"));
    // substrings inside larger words never trigger
    assert!(!has_profanity("a classy assumption about assets"));
    assert!(!has_profanity("the shell prompt crashed"));
    assert!(!has_profanity(""));
    assert!(!has_profanity("   "));
}

#[test]
fn low_knowledge_matches_exact_phrase() {
    let phrases = vec!["I don't know".to_string()];
    assert!(is_low_knowledge("i don't know", &phrases));
    assert!(is_low_knowledge("  I DON'T KNOW  ", &phrases));
}

#[test]
fn low_knowledge_matches_phrase_as_substring() {
    let phrases = vec!["I don't know".to_string()];
    assert!(is_low_knowledge(
        "honestly I don't know anything about this",
        &phrases
    ));
}

#[test]
fn low_knowledge_matches_significant_words_in_order() {
    let phrases = vec!["I have no idea".to_string()];
    // "have" and "idea" appear in order even though the full phrase does not
    assert!(is_low_knowledge(
        "i really have simply no earthly idea honestly",
        &phrases
    ));
    // out of order does not count
    assert!(!is_low_knowledge("no idea is what i have", &phrases));
}

#[test]
fn low_knowledge_single_word_phrase_requires_whole_word() {
    let phrases = vec!["unsure".to_string()];
    assert!(is_low_knowledge("i am unsure about this", &phrases));
    assert!(!is_low_knowledge("i answered unsurely", &phrases));
}

#[test]
fn low_knowledge_handles_empty_inputs() {
    let phrases = vec!["I don't know".to_string()];
    assert!(!is_low_knowledge("", &phrases));
    assert!(!is_low_knowledge("a real answer", &Vec::<String>::new()));
}

#[test]
fn default_phrase_list_covers_common_admissions() {
    assert!(is_low_knowledge(
        "i'm not sure about that one",
        DEFAULT_LOW_KNOWLEDGE_PHRASES
    ));
    assert!(!is_low_knowledge(
        "an index speeds up selective queries",
        DEFAULT_LOW_KNOWLEDGE_PHRASES
    ));
}

#[test]
fn off_topic_flags_substantial_deflection_only() {
    let kw = keywords(&["api"]);
    // long, zero keyword matches, asks the interviewer something
    assert!(is_off_topic(
        "can you tell me more about your company culture instead today",
        &kw
    ));
    // mentioning a keyword keeps it on topic
    assert!(!is_off_topic(
        "can you tell me whether the api culture here matters today",
        &kw
    ));
    // too short to call confidently
    assert!(!is_off_topic("can you tell me", &kw));
    // long and vague but not a deflection
    assert!(!is_off_topic(
        "the weather outside was nice here today and very sunny",
        &kw
    ));
}

#[test]
fn off_topic_requires_keywords_and_an_answer() {
    assert!(!is_off_topic(
        "can you tell me more about your company culture instead today",
        &Vec::<String>::new()
    ));
    assert!(!is_off_topic("", &keywords(&["api"])));
}

#[test]
fn detect_composes_all_three_signals() {
    let mut question = node(1, "Describe database indexing.");
    question.keywords = keywords(&["index"]);
    question.low_knowledge_phrases = vec!["I don't know".to_string()];

    let result = detect("damn, I don't know", &question);
    assert!(result.has_profanity);
    assert!(result.is_low_knowledge);
    assert!(!result.is_off_topic);

    let clean = detect("an index avoids full scans", &question);
    assert!(!clean.has_profanity);
    assert!(!clean.is_low_knowledge);
    assert!(!clean.is_off_topic);
}
