//! Casing helpers for descriptions and document names
//!
//! Specification tables mix ALL-CAPS abbreviations, camel-cased entity
//! names, and underscore-joined tokens; these helpers normalize them into
//! readable descriptions without disturbing abbreviations.

/// Whether every letter in `text` is uppercase (non-letters are ignored).
fn all_capitals(text: &str) -> bool {
    text.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

/// Split a token into alternating letter and digit runs.
///
/// `"LOOP2000A"` becomes `["LOOP", "2000", "A"]`; punctuation stays
/// attached to the run it follows.
fn number_and_text_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_number = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_number && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            in_number = false;
        } else if c.is_ascii_digit() {
            if !in_number && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            in_number = true;
        }
        current.push(c);
    }
    tokens.push(current);
    tokens
}

/// Uppercase the first character of a word and insert a space before each
/// interior uppercase character, splitting camel-cased words apart.
fn word_proper_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len() + 4);
    for (i, c) in word.chars().enumerate() {
        if i == 0 {
            result.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                result.push(' ');
            }
            result.push(c);
        }
    }
    result
}

/// Convert a raw description to proper case.
///
/// Underscores become spaces, camel-cased words are split, letter and digit
/// runs are separated, and words that are entirely uppercase are preserved
/// as abbreviations.
pub fn to_proper_case(value: &str) -> String {
    if value.chars().count() < 2 {
        return value.to_uppercase();
    }

    let value = value.replace('_', " ");
    let mut result = String::with_capacity(value.len() + 8);

    for (i, word) in value.split(' ').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        if word.chars().all(|c| c.is_uppercase()) {
            result.push_str(word);
            continue;
        }
        for (j, token) in number_and_text_tokens(word).iter().enumerate() {
            if j > 0 {
                result.push(' ');
            }
            if all_capitals(token) {
                result.push_str(token);
            } else {
                result.push_str(&word_proper_case(token));
            }
        }
    }

    result
}

/// Uppercase the first letter of each word without inserting separators.
///
/// Word boundaries are the start of the string and any non-alphanumeric
/// character; used to derive the root document name from a URI segment.
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_boundary = true;

    for c in text.chars() {
        if at_boundary && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }

    result
}
