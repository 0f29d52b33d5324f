//! Plain-text search helpers used for highlighting, annotation and
//! company-sentence lookup.

/// Split `text` into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` that is followed by whitespace
/// or the end of the text, so figures like `$22.4bn` stay intact. Trailing
/// text without a terminator is returned as a final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?') {
                end = next_idx + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sentences of `text` that mention `term`, ignoring case.
pub fn sentences_containing<'a>(text: &'a str, term: &str) -> Vec<&'a str> {
    if term.is_empty() {
        return Vec::new();
    }
    split_sentences(text)
        .into_iter()
        .filter(|s| contains_ignore_case(s, term))
        .collect()
}

/// Short summary shown with a saved snippet.
pub fn summarize(text: &str) -> String {
    let head: String = text.chars().take(50).collect();
    format!("Selected Text Summary: {}...", head)
}
