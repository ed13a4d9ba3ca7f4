//! # dox-snippet
//!
//! Turns a recognized declaration into a Doxygen comment body with numbered
//! placeholder fields, and drives generation over a host text buffer.
//!
//! - [`assemble`]: declaration -> [`Snippet`] (brief, details, params,
//!   tparams, return)
//! - [`file_header`]: the header template used at the start of a document
//! - [`Generator`]: reads the buffer around the cursor and picks an
//!   [`Outcome`]
//! - [`completions_for`]: the Doxygen command catalog offered after the sigil

pub mod assemble;
pub mod completions;
pub mod generator;
pub mod header;
pub mod snippet;

pub use assemble::assemble;
pub use completions::{Completion, catalog, completions_for};
pub use generator::{Generator, Outcome, UNAVAILABLE_MESSAGE};
pub use header::{file_header, render_file_header};
pub use snippet::{CLOSING_BODY, CONTINUATION, Placeholder, Section, Snippet, SnippetBuilder, Tag};
