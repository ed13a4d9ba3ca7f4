//! Bracket-aware scanning helpers shared by the normalizer and extractors.
//!
//! These only count bracket depth; they do not understand comparisons such
//! as `a < b`, string literals or comments.

const fn opens(ch: char) -> bool {
    matches!(ch, '<' | '(' | '[' | '{')
}

const fn closes(ch: char) -> bool {
    matches!(ch, '>' | ')' | ']' | '}')
}

pub(crate) const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Byte index of the bracket closing the one at the start of `text`.
///
/// `text` must start with `open`. Returns `None` when it is never closed.
pub(crate) fn matching_close(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Byte index of the first `target` outside any bracket pair.
pub(crate) fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        if depth == 0 && ch == target {
            return Some(idx);
        }
        if opens(ch) {
            depth += 1;
        } else if closes(ch) {
            depth = depth.saturating_sub(1);
        }
    }
    None
}

/// Split on `sep` occurrences outside any bracket pair.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(idx) = find_top_level(rest, sep) {
        parts.push(&rest[..idx]);
        rest = &rest[idx + sep.len_utf8()..];
    }
    parts.push(rest);
    parts
}

/// Remove every `keyword(...)` call, including its balanced argument list.
pub(crate) fn strip_calls(text: &str, keyword: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(keyword) {
        let (head, tail) = rest.split_at(pos);
        let after = &tail[keyword.len()..];
        let args = after.trim_start();
        let starts_word = !head.chars().next_back().is_some_and(is_identifier_char);

        match args
            .starts_with('(')
            .then(|| matching_close(args, '(', ')'))
            .flatten()
        {
            Some(close) if starts_word => {
                out.push_str(head);
                rest = &args[close + 1..];
            }
            _ => {
                out.push_str(head);
                out.push_str(keyword);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
