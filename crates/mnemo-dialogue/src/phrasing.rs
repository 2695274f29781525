//! Turns recalled content into a complete answer sentence.
//!
//! Stored statements arrive in the speaker's voice ("나는 GNJz라고 해");
//! serving them verbatim would echo the user back at themselves. Self
//! introductions are flipped into second person, and fragments without a
//! sentence ending get one appended.

/// Markers that introduce a name, longest first so the spaced forms win.
const LEARNING_PATTERNS: &[&str] = &[
    "라고 합니다",
    "라고 해요",
    "라고합니다",
    "라고해요",
    "라고 해",
    "라고해",
];

/// First-person subjects stripped before extracting the introduced name.
const SELF_PREFIXES: &[&str] = &["나는", "저는", "내가", "제가"];

/// Render recalled content as a complete answer sentence.
pub fn render(content: &str) -> String {
    let content = content.trim();
    if let Some(name) = introduced_name(content) {
        return format!("당신의 이름은 {name}입니다.");
    }
    if is_complete(content) {
        return content.to_string();
    }
    if content.chars().any(is_hangul) {
        format!("{content}입니다.")
    } else {
        format!("{content}.")
    }
}

/// Extract the name from a self introduction ("나는 GNJz라고 해" → "GNJz").
fn introduced_name(content: &str) -> Option<String> {
    let pattern = LEARNING_PATTERNS.iter().find(|p| content.contains(**p))?;
    let mut subject = content.split(*pattern).next().unwrap_or("").trim();
    for prefix in SELF_PREFIXES {
        if let Some(rest) = subject.strip_prefix(prefix) {
            subject = rest.trim_start();
            break;
        }
    }
    let name: String = subject.split_whitespace().collect();
    (!name.is_empty()).then_some(name)
}

/// Whether the content already reads as a finished sentence: a Korean
/// sentence-final syllable (입니다/이에요/이야 and friends) or terminal
/// punctuation.
fn is_complete(content: &str) -> bool {
    matches!(content.chars().last(), Some('다' | '요' | '야' | '.' | '!'))
}

fn is_hangul(c: char) -> bool {
    ('가'..='힣').contains(&c)
}
