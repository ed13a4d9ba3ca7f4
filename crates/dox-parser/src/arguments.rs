//! Argument extractor: normalized parameter list -> ordered `(type, name)` pairs.

use std::sync::LazyLock;

use dox_core::ParameterPair;
use regex::Regex;

use crate::error::ParserError;
use crate::normalize::normalize_arguments;

static ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<type>[A-Za-z_]\w*)\s+(?P<name>[A-Za-z_]\w*)")
        .expect("ARGUMENT regex is invalid")
});

/// Extract parameter pairs from an already normalized parameter list.
///
/// - No comma and no whitespace (`""`, `"void"`, `"T"`): a single `("void", "")`.
/// - Otherwise every comma-separated segment is matched on its own; segments
///   that do not match are dropped, the rest keep their order.
#[must_use]
pub fn extract_arguments(normalized: &str) -> Vec<ParameterPair> {
    let text = normalized.trim();

    if !text.contains(',') && !text.contains(char::is_whitespace) {
        return vec![ParameterPair::void()];
    }

    text.split(',')
        .filter_map(|segment| match match_segment(segment) {
            Ok(pair) => Some(pair),
            Err(error) => {
                tracing::trace!(%error, "dropping parameter segment");
                None
            }
        })
        .collect()
}

/// Normalize `raw` and extract its parameter pairs.
#[must_use]
pub fn parse_arguments(raw: &str) -> Vec<ParameterPair> {
    extract_arguments(&normalize_arguments(raw))
}

fn match_segment(segment: &str) -> Result<ParameterPair, ParserError> {
    ARGUMENT
        .captures(segment)
        .map(|caps| ParameterPair::new(&caps["type"], &caps["name"]))
        .ok_or_else(|| ParserError::MalformedArgumentSegment {
            segment: segment.to_string(),
        })
}
