//! # dox-parser
//!
//! Heuristic recognizer for the C++ declaration that follows a `/**` opener.
//!
//! This is a lexical normalizer plus a priority-ordered pattern table, not a
//! C++ front end. The pipeline is:
//!
//! 1. [`join_logical`]: physical lines -> one logical declaration.
//! 2. [`Classifier`]: logical text -> [`dox_core::Declaration`] (kind, name,
//!    return type, raw parameter text, template parameter names).
//! 3. [`parse_arguments`]: raw parameter text -> ordered `(type, name)` pairs,
//!    via [`normalize_arguments`] and [`extract_arguments`].
//!
//! Template clauses go through [`extract_template_params`].
//!
//! Bracket nesting is handled with depth-counting scanners, so nested
//! template arguments and `decltype(...)` calls are balanced. Comparisons
//! such as `a < b` inside default arguments are not understood.

pub mod arguments;
pub mod classifier;
pub mod error;
pub mod lines;
pub mod normalize;
pub mod patterns;
mod scan;
pub mod templates;

pub use arguments::{extract_arguments, parse_arguments};
pub use classifier::Classifier;
pub use error::ParserError;
pub use lines::join_logical;
pub use normalize::normalize_arguments;
pub use patterns::{Anchor, DeclarationPattern, TemplateClause};
pub use templates::extract_template_params;
