//! Anaphora resolution against recent conversation history.
//!
//! "그거 뭐야?" after asking about apples becomes a question about apples
//! again: the reference word is replaced by the topic of the most recent
//! turn before the question reaches classification and recall.

use mnemo_core::models::ConversationTurn;

/// Words that point back at the previous turn's topic. English entries
/// match case-insensitively ("That?" at sentence start still resolves).
const REFERENCE_WORDS: &[&str] = &["그거", "그건", "그것", "그게", "저거", "that", "it"];

/// The token with trailing punctuation stripped, folded for comparison
/// against [`REFERENCE_WORDS`].
fn stem(token: &str) -> String {
    token.trim_end_matches(['?', '？', '.', '!']).to_lowercase()
}

/// Replace a reference word in `input` with the previous turn's topic.
/// Returns `None` when there is nothing to resolve: no reference word, no
/// history, or no extractable topic.
pub fn resolve(input: &str, history: &[ConversationTurn]) -> Option<String> {
    let reference = REFERENCE_WORDS.iter().find(|word| {
        input
            .split_whitespace()
            .any(|token| stem(token) == **word)
    })?;

    let topic = history.iter().rev().find_map(|turn| topic_of(&turn.question))?;

    let resolved = input
        .split_whitespace()
        .map(|token| {
            if stem(token) == *reference {
                // The token is the reference word plus trailing punctuation.
                let tail = &token[token.trim_end_matches(['?', '？', '.', '!']).len()..];
                format!("{topic}{tail}")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(resolved)
}

/// The leading token of an utterance, which in subject-first sentences
/// carries the topic ("사과는 무슨 색이야?" → "사과는").
fn topic_of(utterance: &str) -> Option<String> {
    utterance
        .split_whitespace()
        .next()
        .map(|token| token.trim_end_matches(['?', '？', '.', '!']).to_string())
        .filter(|topic| !topic.is_empty() && !REFERENCE_WORDS.contains(&topic.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::models::AnswerSource;

    fn turn(question: &str) -> ConversationTurn {
        ConversationTurn::new(question.to_string(), "답".to_string(), AnswerSource::Memory)
    }

    #[test]
    fn replaces_reference_with_previous_topic() {
        let history = vec![turn("사과는 무슨 색이야?")];
        let resolved = resolve("그거 뭐야?", &history).unwrap();
        assert!(resolved.contains("사과는"));
        assert!(!resolved.contains("그거"));
    }

    #[test]
    fn keeps_trailing_punctuation_on_the_replaced_token() {
        let history = vec![turn("사과는 무슨 색이야?")];
        let resolved = resolve("그거?", &history).unwrap();
        assert_eq!(resolved, "사과는?");
    }

    #[test]
    fn capitalized_english_reference_resolves() {
        let history = vec![turn("사과는 무슨 색이야?")];
        assert_eq!(resolve("That?", &history).unwrap(), "사과는?");
        assert_eq!(resolve("It?", &history).unwrap(), "사과는?");
    }

    #[test]
    fn nothing_to_resolve_without_history() {
        assert!(resolve("그거 뭐야?", &[]).is_none());
    }

    #[test]
    fn plain_questions_pass_through_untouched() {
        let history = vec![turn("사과는 무슨 색이야?")];
        assert!(resolve("바나나는 무슨 색이야?", &history).is_none());
    }

    #[test]
    fn skips_reference_only_history_when_finding_a_topic() {
        let history = vec![turn("사과는 무슨 색이야?"), turn("그거?")];
        let resolved = resolve("그거 진짜야?", &history).unwrap();
        assert!(resolved.contains("사과는"));
    }
}
