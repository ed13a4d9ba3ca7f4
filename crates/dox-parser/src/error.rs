//! Recognizer error types for dox-parser.
//!
//! None of these are fatal. Callers recover from each one: end of input
//! ends the lookahead, an unmatched declaration falls back to a minimal
//! comment body, and a malformed argument segment is dropped.

/// Errors that can occur while recognizing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("No input available at offset {offset}")]
    NoInputAvailable { offset: usize },

    #[error("No declaration pattern matched: {text:?}")]
    NoPatternMatch { text: String },

    #[error("Malformed argument segment: {segment:?}")]
    MalformedArgumentSegment { segment: String },
}
