//! Joining physical lines into one logical declaration.

/// Characters that end a declaration head; no further lines are joined after one.
const TERMINATORS: [char; 3] = [';', '{', '}'];

/// Join `lines[0]` with up to `max_lines` following lines.
///
/// Joining stops early at a blank line, or once the text gathered so far
/// contains a terminator. Trailing `//` comments are dropped and runs of
/// whitespace, line breaks included, collapse to a single space.
#[must_use]
pub fn join_logical<S: AsRef<str>>(lines: &[S], max_lines: usize) -> String {
    let mut joined = String::new();

    for line in lines.iter().take(max_lines.saturating_add(1)) {
        let line = strip_line_comment(line.as_ref());
        if line.trim().is_empty() {
            break;
        }
        for word in line.split_whitespace() {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(word);
        }
        if joined.contains(TERMINATORS) {
            break;
        }
    }

    joined
}

fn strip_line_comment(line: &str) -> &str {
    line.find("//").map_or(line, |idx| &line[..idx])
}
