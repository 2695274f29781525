//! Canned responses for greetings and acknowledgements.
//!
//! Checked before classification, so a greeting never reaches the learn
//! path and never becomes a memory record.

/// Exact-match table, keyed by trimmed lowercase input.
const QUICK_RESPONSES: &[(&str, &str)] = &[
    ("안녕", "안녕하세요!"),
    ("안녕하세요", "안녕하세요! 무엇을 기억해 드릴까요?"),
    ("하이", "안녕하세요!"),
    ("hi", "Hello!"),
    ("hello", "Hello! What should I remember for you?"),
    ("고마워", "천만에요!"),
    ("감사합니다", "천만에요!"),
    ("thanks", "You're welcome!"),
    ("thank you", "You're welcome!"),
    ("잘자", "좋은 꿈 꾸세요!"),
    ("잘 자", "좋은 꿈 꾸세요!"),
    ("bye", "Goodbye!"),
    ("잘가", "안녕히 가세요!"),
];

/// Look up a canned response. Matching is exact after trimming and ASCII
/// lowercasing, so "Hello " matches but "hello there" does not.
pub fn lookup(input: &str) -> Option<&'static str> {
    let key = input.trim().to_lowercase();
    QUICK_RESPONSES
        .iter()
        .find(|(pattern, _)| *pattern == key)
        .map(|(_, response)| *response)
}
