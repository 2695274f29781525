//! Anti-contamination classifier.
//!
//! Pure rule-based classification of input text into statements and
//! questions. Questions must never reach the record store as learned
//! content, and the classification also picks the orchestrator's branch.

use std::sync::LazyLock;

use regex::Regex;

/// Classification outcome for a single utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utterance {
    Statement,
    Question,
}

/// Interrogative sentence endings, matched against the text after internal
/// whitespace is stripped and the text is lowercased.
const INTERROGATIVE_SUFFIXES: &[&str] = &[
    "뭐야",
    "뭐예요",
    "뭐죠",
    "뭔가요",
    "뭔지",
    "무엇이야",
    "무엇인가요",
    "무엇인지",
    "누구야",
    "누구예요",
    "누구세요",
    "어디야",
    "어디예요",
    "언제야",
    "어때",
    "어때요",
    "일까",
    "일까요",
    "까요",
    "나요",
    "가요",
    "기억나",
    "맞지",
    "알아",
    "알지",
];

/// Tokens that mark a sentence as interrogative when present anywhere,
/// unless a learning-intent pattern claims the sentence first.
const INTERROGATIVE_TOKENS: &[&str] = &[
    "뭐", "무엇", "어떻게", "어디", "언제", "누구", "왜", "기억나", "알려줘",
];

/// Learning-intent markers: statements that teach the system something,
/// even when they contain interrogative-looking tokens.
const LEARNING_MARKERS: &[&str] = &[
    "라고해",
    "라고해요",
    "라고합니다",
    "내이름은",
    "제이름은",
    "기억해둬",
    "알아둬",
];

static LEARNING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "my name is X"
        r"(?i)my name is\s*\S+",
        // "X is called Y"
        r"(?i)\S+\s*is called\s*\S+",
        // "X는 Y이다/입니다/예요" definition forms (compact text).
        r"(?:은|는|이|가)\S+(?:이다|입니다|이에요|예요|이야)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

fn is_learning_intent(compact: &str) -> bool {
    LEARNING_MARKERS.iter().any(|m| compact.contains(m))
        || LEARNING_PATTERNS.iter().any(|re| re.is_match(compact))
}

/// Classify text as a statement or a question.
///
/// Rule order:
/// 1. Trailing `?` is always a question.
/// 2. A recognized interrogative suffix (whitespace-insensitive) is a
///    question.
/// 3. A learning-intent pattern forces a statement even when the text
///    contains interrogative tokens ("내 이름은 GNJz라고 해").
/// 4. An interrogative token anywhere in the text is a question.
/// 5. Everything else is a statement.
pub fn classify(text: &str) -> Utterance {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Utterance::Statement;
    }

    if trimmed.ends_with('?') || trimmed.ends_with('？') {
        return Utterance::Question;
    }

    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if INTERROGATIVE_SUFFIXES.iter().any(|s| compact.ends_with(s)) {
        return Utterance::Question;
    }

    if is_learning_intent(&compact) {
        return Utterance::Statement;
    }

    if INTERROGATIVE_TOKENS.iter().any(|t| compact.contains(t)) {
        return Utterance::Question;
    }

    Utterance::Statement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_question_mark_is_question() {
        assert_eq!(classify("이름이 뭐야?"), Utterance::Question);
        assert_eq!(classify("what is rust?"), Utterance::Question);
        assert_eq!(classify("나는?"), Utterance::Question);
    }

    #[test]
    fn interrogative_suffix_without_mark_is_question() {
        assert_eq!(classify("이름이 뭐야"), Utterance::Question);
        assert_eq!(classify("이 름 이 뭐 야"), Utterance::Question);
        assert_eq!(classify("너는 누구야"), Utterance::Question);
        assert_eq!(classify("그건 어디야"), Utterance::Question);
    }

    #[test]
    fn learning_intent_beats_interrogative_tokens() {
        assert_eq!(classify("나는 GNJz라고 해"), Utterance::Statement);
        assert_eq!(classify("내 이름은 GNJz"), Utterance::Statement);
        assert_eq!(classify("my name is GNJz"), Utterance::Statement);
        assert_eq!(classify("this fruit is called apple"), Utterance::Statement);
    }

    #[test]
    fn plain_statements_default() {
        assert_eq!(classify("사과는 빨간색"), Utterance::Statement);
        assert_eq!(classify("rust is a systems language"), Utterance::Statement);
        assert_eq!(classify(""), Utterance::Statement);
        assert_eq!(classify("   "), Utterance::Statement);
    }

    #[test]
    fn interrogative_token_mid_sentence_is_question() {
        assert_eq!(classify("어떻게 동작하는지 알려줘"), Utterance::Question);
    }
}
