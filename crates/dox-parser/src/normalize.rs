//! Text normalizer for raw parameter lists.
//!
//! Strips the noise that makes C++ parameter declarations irregular so that
//! a plain `<type> <name>` pattern can pick out each parameter. Passes run in
//! a fixed order; later passes assume the earlier noise is already gone.
//!
//! ```text
//! const std::vector<std::pair<int, int>>& items, int (*cb)(int), char buf[16]
//!   -> vector items, int cbint, char buf
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::scan::{is_identifier_char, matching_close};

static CV_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|volatile)\b\s*").expect("CV_QUALIFIER regex is invalid")
});

static NAMESPACE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w*::").expect("NAMESPACE_PREFIX regex is invalid"));

static ARRAY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").expect("ARRAY_SUFFIX regex is invalid"));

/// Flatten a raw parameter list for the argument extractor.
///
/// Running it again on its own output changes nothing.
#[must_use]
pub fn normalize_arguments(raw: &str) -> String {
    let text = strip_sigils(raw);
    let text = text.replace("...", "");
    let text = CV_QUALIFIER.replace_all(&text, "");
    let text = NAMESPACE_PREFIX.replace_all(&text, "");
    let text = collapse_template_arguments(&text);
    let text = strip_parentheses(&text);
    let text = strip_array_suffixes(&text);

    tracing::debug!(before = raw, after = %text, "normalized argument list");
    text
}

/// Drop `&` and `*`, keeping a space where they separated two words.
///
/// `char*const name` becomes `char const name`, so the cv-qualifier pass
/// still sees `const` as a word.
fn strip_sigils(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut skipped = false;
    for ch in text.chars() {
        if matches!(ch, '&' | '*') {
            skipped = true;
            continue;
        }
        if skipped
            && is_identifier_char(ch)
            && out.chars().next_back().is_some_and(is_identifier_char)
        {
            out.push(' ');
        }
        skipped = false;
        out.push(ch);
    }
    out
}

/// Collapse `ident<...>` to `ident`, balancing nested angle brackets.
///
/// A `<` that does not follow an identifier, or that is never closed, is kept.
fn collapse_template_arguments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let (head, tail) = rest.split_at(open);
        out.push_str(head);

        let follows_identifier = out
            .trim_end()
            .chars()
            .next_back()
            .is_some_and(is_identifier_char);

        match matching_close(tail, '<', '>') {
            Some(close) if follows_identifier => {
                out.truncate(out.trim_end().len());
                rest = &tail[close + 1..];
            }
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Replace parenthesized groups by their content.
fn strip_parentheses(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

fn strip_array_suffixes(text: &str) -> String {
    let mut current = text.to_string();
    while ARRAY_SUFFIX.is_match(&current) {
        current = ARRAY_SUFFIX.replace_all(&current, "").into_owned();
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("int a, float b", "int a, float b")]
    #[case("const std::string& name", "string name")]
    #[case("volatile int* const ptr", "int ptr")]
    #[case("Args&&... args", "Args args")]
    #[case("std::vector<int> values", "vector values")]
    #[case("std::map<std::string, std::vector<int>> index", "map index")]
    #[case("std::vector<std::pair<int, int>>& items", "vector items")]
    #[case("int (*callback)(int)", "int callbackint")]
    #[case("char buffer[16]", "char buffer")]
    #[case("int grid[3][4]", "int grid")]
    #[case("::std::size_t count", "size_t count")]
    #[case("const_iterator it", "const_iterator it")]
    #[case("char*const name", "char name")]
    #[case("T*const value", "T value")]
    #[case("int&&rvalue", "int rvalue")]
    fn normalizes_parameter_lists(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_arguments(raw), expected);
    }

    #[rstest]
    #[case("const Foo& a, volatile Bar* b, ns::Baz c")]
    #[case("const std::map<const char*, ns::inner::T>& m")]
    #[case("volatile unsigned long* const* p")]
    #[case("char*const name")]
    #[case("T*const value, const char*volatile*const p")]
    fn noise_tokens_are_removed(#[case] raw: &str) {
        let out = normalize_arguments(raw);
        assert!(!out.contains('&'), "{out:?}");
        assert!(!out.contains('*'), "{out:?}");
        assert!(!out.contains("::"), "{out:?}");
        assert!(!out.split(|c: char| !is_identifier_char(c)).any(|w| w == "const"));
        assert!(!out.split(|c: char| !is_identifier_char(c)).any(|w| w == "volatile"));
    }

    #[rstest]
    #[case("const std::vector<std::pair<int, int>>& items, int (*cb)(int), char buf[16]")]
    #[case("T&& value, const Alloc& alloc = Alloc()")]
    #[case("std::function<void(const Event&)> handler")]
    #[case("a < b")]
    #[case("T*const value")]
    #[case("")]
    fn normalization_is_idempotent(#[case] raw: &str) {
        let once = normalize_arguments(raw);
        assert_eq!(normalize_arguments(&once), once);
    }

    #[test]
    fn unclosed_angle_bracket_is_kept() {
        assert_eq!(collapse_template_arguments("vector<int x"), "vector<int x");
    }

    #[test]
    fn angle_bracket_after_non_identifier_is_kept() {
        assert_eq!(collapse_template_arguments("x = <y>"), "x = <y>");
    }
}
