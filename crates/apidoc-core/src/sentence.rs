//! Summary text helpers
//!
//! All offsets here are in codepoints, never bytes.

/// Abbreviations that end in a period but do not end a sentence.
const ABBREVIATIONS: &[&str] = &["e.g.", "i.e."];

/// Sentence boundaries are only searched from this codepoint on.
const MIN_SENTENCE_CHARS: usize = 4;

/// Extract the first sentence out of `text`.
///
/// The sentence ends at the first `.` found at or after codepoint 4, unless
/// that period belongs to `e.g.` or `i.e.`, in which case extraction continues
/// with the rest of the text. Text without such a period is returned as is.
///
/// ```
/// use apidoc_core::extract_first_sentence;
///
/// assert_eq!(
///     extract_first_sentence("He is tired, e.g. very tired. He slept."),
///     "He is tired, e.g. very tired."
/// );
/// assert_eq!(extract_first_sentence("Hi."), "Hi.");
/// ```
pub fn extract_first_sentence(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    first_sentence(&chars)
}

fn first_sentence(chars: &[char]) -> String {
    if chars.len() <= MIN_SENTENCE_CHARS {
        return chars.iter().collect();
    }
    let Some(pos) = chars[MIN_SENTENCE_CHARS..]
        .iter()
        .position(|&c| c == '.')
        .map(|offset| offset + MIN_SENTENCE_CHARS)
    else {
        return chars.iter().collect();
    };

    let mut sentence: String = chars[..=pos].iter().collect();
    if chars.len() >= pos + 3 {
        let window: String = chars[pos - 1..pos + 3].iter().collect();
        if ABBREVIATIONS.contains(&window.as_str()) {
            sentence.push_str(&first_sentence(&chars[pos + 1..]));
        }
    }
    sentence
}

/// Upper-case the first character of `text`, leaving the rest untouched.
pub fn uc_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
